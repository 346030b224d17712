//! Basic document lifecycle example for the next-gen-db client
//!
//! Run with: cargo run --example basic_usage

use next_gen_db_client::Client;
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    // Get endpoint from environment or use the default
    let endpoint =
        std::env::var("NEXT_GEN_DB_URL").unwrap_or_else(|_| "http://localhost:8047".to_string());

    // Create client
    let client = Client::new(&endpoint)?;

    // Create a document
    info!("Creating document 'user:alice'...");
    let created = client
        .create_document("user:alice", &json!({"name": "Alice", "age": 30, "city": "NYC"}))
        .await?;
    info!("Created: {}", created);

    // Retrieve it
    info!("Fetching document 'user:alice'...");
    let doc = client.get_document("user:alice").await?;
    info!("Fetched: {}", doc);

    // Update it
    info!("Updating document 'user:alice'...");
    let updated = client
        .update_document("user:alice", &json!({"name": "Alice", "age": 31, "city": "NYC"}))
        .await?;
    info!("Updated: {}", updated);

    // Delete it
    info!("Deleting document 'user:alice'...");
    let status = client.delete_document("user:alice").await?;
    info!("Delete status: {}", status.status);

    info!("Example completed successfully!");
    Ok(())
}
