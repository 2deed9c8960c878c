//! Turn engine error types.

use thiserror::Error;

use crate::lobby::{LobbyId, LobbyStatus, PlayerId};
use crate::store::StoreError;

/// Turn engine errors
#[derive(Debug, Error)]
pub enum GameError {
    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Lobby document is missing
    #[error("Lobby not found: {0}")]
    LobbyNotFound(LobbyId),

    /// No player with `isHost` set among the lobby's players
    #[error("Cannot start game without a host in lobby {0}")]
    HostNotFound(LobbyId),

    /// The player whose turn it is does not appear in the supplied list
    #[error("Current player not found: {0}")]
    CurrentPlayerNotFound(PlayerId),

    /// Turns are only legal while a game is in progress
    #[error("Game is not in progress (status: {0})")]
    GameNotInProgress(LobbyStatus),
}

/// Result type for turn engine operations
pub type GameResult<T> = Result<T, GameError>;
