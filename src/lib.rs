//! An HTTP client for the next-gen-db server
//!
//! This library exposes the next-gen-db document and graph API as typed async
//! method calls, so callers never construct raw HTTP requests themselves.
//! Each call performs exactly one HTTP exchange against the server and either
//! returns the decoded JSON response or a typed error derived from the HTTP
//! status code.
//!
//! # Features
//! - Document operations: create, get, update, delete
//! - Graph operations: nodes and labeled edges
//! - Percent-encoded keys and node ids, safe for arbitrary identifiers
//! - Typed error taxonomy (`NotFound` vs. server errors vs. transport faults)
//! - Plain HTTP and HTTPS endpoints
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use next_gen_db_client::Client;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), next_gen_db_client::Error> {
//!     let client = Client::new("http://localhost:8047")?;
//!
//!     // Store a document
//!     let created = client
//!         .create_document("user:alice", &json!({"name": "Alice"}))
//!         .await?;
//!     println!("Created: {}", created);
//!
//!     // Retrieve it
//!     let doc = client.get_document("user:alice").await?;
//!     println!("Fetched: {}", doc);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod client;
pub mod error;
pub mod types;

pub use client::{Client, ClientConfig};
pub use error::{Error, Result};
pub use types::*;
