//! Store error types

use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record already exists: {collection}/{id}")]
    Conflict { collection: &'static str, id: String },

    #[error("Invalid record id: {0:?}")]
    InvalidId(String),
}

impl StoreError {
    /// Check if this is a conflict (record already exists) error
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }
}
