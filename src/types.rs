//! Data types for the next-gen-db client

use serde::{Deserialize, Serialize};

/// Success indicator returned by a document deletion.
///
/// The server may answer a DELETE with an empty body (204) or an arbitrary
/// JSON payload; the client always reports the deletion with this fixed
/// object instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteStatus {
    /// Human-readable confirmation, always `"Document deleted"`
    pub status: String,
}

impl DeleteStatus {
    /// The canonical deletion confirmation
    pub fn deleted() -> Self {
        Self {
            status: "Document deleted".to_string(),
        }
    }
}
