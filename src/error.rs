//! Error types for the next-gen-db client

use std::io;
use thiserror::Error;

/// Errors that can occur when interacting with the next-gen-db server
#[derive(Error, Debug)]
pub enum Error {
    /// The requested document, node, or edge does not exist (status 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server rejected the request (any status >= 400 other than 404)
    #[error("Server error (status {status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message from the server's `detail` field, or a fallback
        message: String,
    },

    /// Network or connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// I/O error while reading a response body
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request could not be constructed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
