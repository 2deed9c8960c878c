//! Lobby error types.

use thiserror::Error;

use crate::store::StoreError;

/// Lobby directory errors
///
/// User-input rejections (duplicate name, full lobby) are not errors; they
/// surface as `Ok(None)` from the join operation.
#[derive(Debug, Error)]
pub enum LobbyError {
    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for lobby operations
pub type LobbyResult<T> = Result<T, LobbyError>;
