//! Lobby directory: session containers, players, and live views.
//!
//! This module implements:
//! - Lobby and player models matching the stored document shape
//! - Lobby creation with the host seated as the first player
//! - Join with duplicate-name and capacity rejection
//! - Unconditional leave
//! - Live subscriptions for the lobby list, a single lobby, and its players
//!
//! ## Example
//!
//! ```
//! use rogue_goose::lobby::LobbyDirectory;
//! use rogue_goose::store::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = LobbyDirectory::new(Arc::new(MemoryStore::new()));
//!     let lobby_id = directory.create_lobby("Foo", "Alice").await?;
//!
//!     let bob = directory.join_lobby(lobby_id, "Bob").await?;
//!     assert!(bob.is_some());
//!
//!     // Second "Bob" is rejected, not an error
//!     assert!(directory.join_lobby(lobby_id, "Bob").await?.is_none());
//!     Ok(())
//! }
//! ```

pub mod directory;
pub mod errors;
pub mod models;

pub use directory::LobbyDirectory;
pub use errors::{LobbyError, LobbyResult};
pub use models::{
    GameState, Lobby, LobbyId, LobbyStatus, MAX_PLAYERS, PLAYER_COLORS, Player, PlayerId,
};

pub(crate) use models::{LOBBIES, players_collection};
