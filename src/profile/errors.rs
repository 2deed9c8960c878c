//! Profile error types.

use thiserror::Error;

/// Profile and scratchpad errors
#[derive(Debug, Error)]
pub enum ProfileError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Scratchpad lock poisoned
    #[error("Scratchpad lock poisoned")]
    Poisoned,
}

/// Result type for profile operations
pub type ProfileResult<T> = Result<T, ProfileError>;
