//! Lobby directory over the document store.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::store::{DocumentStore, FromDocument, TypedCollectionWatch, TypedDocumentWatch};

use super::{
    errors::LobbyResult,
    models::{LOBBIES, Lobby, LobbyId, LobbyStatus, MAX_PLAYERS, PLAYER_COLORS, Player, PlayerId,
        players_collection},
};

/// Directory of lobbies: listing, creation, join/leave, live views.
///
/// All durable state lives in the document store; the directory itself is
/// stateless and cheap to clone around an `Arc`'d store.
pub struct LobbyDirectory {
    store: Arc<dyn DocumentStore>,
}

impl LobbyDirectory {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Subscribe to the live, order-irrelevant list of lobbies
    pub async fn list_lobbies(&self) -> LobbyResult<TypedCollectionWatch<Lobby>> {
        Ok(self.store.watch_collection(LOBBIES).await?.typed())
    }

    /// Create a lobby and seat `host_name` as its first player.
    ///
    /// The lobby and host are two independent writes with no transaction; a
    /// crash between them leaves a hostless lobby (known gap).
    pub async fn create_lobby(&self, name: &str, host_name: &str) -> LobbyResult<LobbyId> {
        let lobby = Lobby {
            id: LobbyId::default(),
            name: name.to_string(),
            status: LobbyStatus::Waiting,
            max_players: MAX_PLAYERS,
            game_state: None,
            created_at: Utc::now(),
        };
        let lobby_id = self
            .store
            .create(LOBBIES, serde_json::to_value(&lobby)?)
            .await?;

        let host = Player {
            id: PlayerId::default(),
            name: host_name.to_string(),
            is_ready: true,
            is_host: true,
            color: PLAYER_COLORS[0].to_string(),
            position: 0,
        };
        self.store
            .create(
                &players_collection(lobby_id),
                serde_json::to_value(&host)?,
            )
            .await?;

        log::info!("created lobby {lobby_id} ({name}) hosted by {host_name}");
        Ok(lobby_id)
    }

    /// Join a lobby by display name.
    ///
    /// Returns `Ok(None)` if a player with that name is already present or
    /// the lobby is full. The name check is read-then-write with no
    /// uniqueness guarantee: two simultaneous joins can both pass it.
    pub async fn join_lobby(
        &self,
        lobby_id: LobbyId,
        player_name: &str,
    ) -> LobbyResult<Option<PlayerId>> {
        let collection = players_collection(lobby_id);

        let same_name = self
            .store
            .query_eq(&collection, "name", &Value::String(player_name.to_string()))
            .await?;
        if !same_name.is_empty() {
            log::debug!("{player_name} is already in lobby {lobby_id}");
            return Ok(None);
        }

        let player_count = self.store.list(&collection).await?.len();
        if player_count >= MAX_PLAYERS {
            log::debug!("lobby {lobby_id} is full");
            return Ok(None);
        }

        let player = Player {
            id: PlayerId::default(),
            name: player_name.to_string(),
            is_ready: false,
            is_host: false,
            color: PLAYER_COLORS[player_count].to_string(),
            position: 0,
        };
        let player_id = self
            .store
            .create(&collection, serde_json::to_value(&player)?)
            .await?;

        log::info!("{player_name} joined lobby {lobby_id}");
        Ok(Some(player_id))
    }

    /// Remove a player from a lobby, unconditionally.
    ///
    /// Colors and turn order are not rebalanced; a departing current player
    /// leaves the game pointing at a nonexistent player.
    pub async fn leave_lobby(&self, lobby_id: LobbyId, player_id: PlayerId) -> LobbyResult<()> {
        self.store
            .delete(&players_collection(lobby_id), player_id)
            .await?;
        log::info!("player {player_id} left lobby {lobby_id}");
        Ok(())
    }

    /// Subscribe to a single lobby document
    pub async fn get_lobby(&self, lobby_id: LobbyId) -> LobbyResult<TypedDocumentWatch<Lobby>> {
        Ok(self.store.watch_document(LOBBIES, lobby_id).await?.typed())
    }

    /// Subscribe to a lobby's live player list
    pub async fn get_players(
        &self,
        lobby_id: LobbyId,
    ) -> LobbyResult<TypedCollectionWatch<Player>> {
        Ok(self
            .store
            .watch_collection(&players_collection(lobby_id))
            .await?
            .typed())
    }

    /// One-shot decoded read of a lobby's players
    pub async fn players_snapshot(&self, lobby_id: LobbyId) -> LobbyResult<Vec<Player>> {
        let docs = self.store.list(&players_collection(lobby_id)).await?;
        docs.iter()
            .map(|doc| Player::from_document(doc).map_err(Into::into))
            .collect()
    }
}
