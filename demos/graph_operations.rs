//! Graph node and edge example for the next-gen-db client
//!
//! Run with: cargo run --example graph_operations

use next_gen_db_client::{Client, Error};
use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let endpoint =
        std::env::var("NEXT_GEN_DB_URL").unwrap_or_else(|_| "http://localhost:8047".to_string());
    let client = Client::new(&endpoint)?;

    // Add two nodes
    info!("Adding node 'alice'...");
    client
        .add_node("alice", &json!({"kind": "person", "age": 30}))
        .await?;

    info!("Adding node 'bob'...");
    client
        .add_node("bob", &json!({"kind": "person", "age": 35}))
        .await?;

    // Connect them
    info!("Adding edge alice -[knows]- bob...");
    let edge = client.add_edge("alice", "bob", "knows").await?;
    info!("Edge added: {}", edge);

    // Read back a node
    info!("Fetching node 'alice'...");
    let node = client.get_node("alice").await?;
    info!("Node: {}", node);

    // Read back the edge
    info!("Fetching edge between 'alice' and 'bob'...");
    let edge = client.get_edge("alice", "bob").await?;
    info!("Edge: {}", edge);

    // Missing nodes surface as typed NotFound errors
    match client.get_node("nobody").await {
        Ok(node) => info!("Unexpected node: {}", node),
        Err(Error::NotFound(msg)) => warn!("Node missing, server said: {}", msg),
        Err(e) => return Err(e.into()),
    }

    info!("Example completed successfully!");
    Ok(())
}
