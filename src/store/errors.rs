//! Document store error types.

use thiserror::Error;

use super::document::DocumentId;

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document not found
    #[error("Document not found: {collection}/{id}")]
    NotFound {
        collection: String,
        id: DocumentId,
    },

    /// Patch payload was not a JSON object
    #[error("Invalid patch: expected a JSON object")]
    InvalidPatch,

    /// Subscription closed because the store was dropped
    #[error("Subscription closed")]
    SubscriptionClosed,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
