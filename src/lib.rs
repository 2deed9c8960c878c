//! # Rogue Goose
//!
//! A multiplayer lobby and turn engine for the Game of the Goose: a
//! fixed-length 63-square track where players take turns moving by dice roll
//! until someone lands exactly on the final square, with overshoot bouncing
//! back toward it.
//!
//! All durable state lives in an external document store reached through the
//! [`store::DocumentStore`] trait: collection/document CRUD with partial
//! patches and live subscriptions. The store is last-write-wins with no
//! transactions; multi-document operations (lobby creation, turn resolution,
//! restart) are independent writes with no rollback, and concurrent clients
//! coordinate only through the store's own ordering.
//!
//! ## Core Modules
//!
//! - [`store`]: Document store boundary and in-memory reference implementation
//! - [`lobby`]: Lobby directory - creation, join/leave, live views
//! - [`game`]: Turn engine - board math, turn resolution, restart
//! - [`profile`]: Remembered local player name
//!
//! ## Example
//!
//! ```
//! use rogue_goose::{LobbyDirectory, MemoryStore, TurnEngine};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryStore::new());
//!     let directory = LobbyDirectory::new(store.clone());
//!     let engine = TurnEngine::new(store);
//!
//!     let lobby_id = directory.create_lobby("Foo", "Alice").await?;
//!     directory.join_lobby(lobby_id, "Bob").await?;
//!     engine.start_game(lobby_id).await?;
//!
//!     let players = directory.players_snapshot(lobby_id).await?;
//!     let host = players.iter().find(|p| p.is_host).unwrap();
//!     let outcome = engine.take_turn(lobby_id, &players, host.id).await?;
//!     assert!((1..=6).contains(&outcome.dice_roll));
//!     Ok(())
//! }
//! ```

/// Document store boundary and in-memory implementation.
pub mod store;
pub use store::{DocumentStore, MemoryStore, StoreError};

/// Lobby directory, models, and live views.
pub mod lobby;
pub use lobby::{
    GameState, Lobby, LobbyDirectory, LobbyError, LobbyStatus, MAX_PLAYERS, PLAYER_COLORS, Player,
};

/// Turn engine and board math.
pub mod game;
pub use game::{FINAL_SQUARE, GameError, TurnEngine, TurnOutcome, resolve_move};

/// Local player profile.
pub mod profile;
pub use profile::{PlayerProfile, ProfileConfig, Scratchpad};
