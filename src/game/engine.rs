//! Turn engine resolving dice rolls, movement, and turn rotation.

use std::sync::Arc;

use futures_util::future::try_join_all;
use serde_json::json;

use crate::lobby::{
    GameState, LOBBIES, Lobby, LobbyId, LobbyStatus, Player, PlayerId, players_collection,
};
use crate::store::{DocumentStore, FromDocument};

use super::{
    board::{self, FINAL_SQUARE},
    errors::{GameError, GameResult},
};

/// The result of one resolved turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub dice_roll: u8,
    pub new_position: u8,
    pub next_player_id: PlayerId,
    /// Set when the mover landed exactly on the terminal square
    pub winner: Option<String>,
}

/// Turn engine over the lobby state machine:
/// `waiting -> in-progress` (start), `in-progress -> finished` (win),
/// `finished -> in-progress` (restart).
///
/// Every operation is a handful of independent last-write-wins store calls.
/// There is no locking or compare-and-set; two simultaneous turns for the
/// same lobby interleave exactly as the hosted store lets them.
pub struct TurnEngine {
    store: Arc<dyn DocumentStore>,
}

impl TurnEngine {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Start a game, handing the first turn to the host.
    ///
    /// Fails with [`GameError::HostNotFound`] if no current player has the
    /// host flag set.
    pub async fn start_game(&self, lobby_id: LobbyId) -> GameResult<()> {
        let players = self.players_snapshot(lobby_id).await?;
        let host = players
            .iter()
            .find(|p| p.is_host)
            .ok_or(GameError::HostNotFound(lobby_id))?;

        let game_state = GameState {
            current_player_turn: host.id,
            last_dice_roll: None,
            winner: None,
        };
        self.store
            .update(
                LOBBIES,
                lobby_id,
                json!({
                    "status": LobbyStatus::InProgress,
                    "gameState": game_state,
                }),
            )
            .await?;

        log::info!("game started in lobby {lobby_id}, {} moves first", host.name);
        Ok(())
    }

    /// Roll the die and resolve one turn for `current_player_id`.
    ///
    /// Turn rotation follows the caller-supplied ordering of `players`.
    pub async fn take_turn(
        &self,
        lobby_id: LobbyId,
        players: &[Player],
        current_player_id: PlayerId,
    ) -> GameResult<TurnOutcome> {
        let dice_roll = board::roll_die(&mut rand::rng());
        self.apply_turn(lobby_id, players, current_player_id, dice_roll)
            .await
    }

    /// Resolve one turn with a known dice roll.
    ///
    /// 1. Rejects unless the lobby is in progress; a finished game's winner
    ///    cannot be moved further without a restart.
    /// 2. Persists the mover's new position.
    /// 3. Patches the turn pointer and last roll on the lobby.
    /// 4. On landing exactly on 63, a second separate write records the
    ///    winner and flips the status to finished. A crash between the two
    ///    writes leaves the status stale relative to the winner (known gap).
    pub async fn apply_turn(
        &self,
        lobby_id: LobbyId,
        players: &[Player],
        current_player_id: PlayerId,
        dice_roll: u8,
    ) -> GameResult<TurnOutcome> {
        let lobby = self.lobby_snapshot(lobby_id).await?;
        if lobby.status != LobbyStatus::InProgress {
            return Err(GameError::GameNotInProgress(lobby.status));
        }

        let current_index = players
            .iter()
            .position(|p| p.id == current_player_id)
            .ok_or(GameError::CurrentPlayerNotFound(current_player_id))?;
        let current_player = &players[current_index];

        let new_position = board::resolve_move(current_player.position, dice_roll);
        self.store
            .update(
                &players_collection(lobby_id),
                current_player_id,
                json!({ "position": new_position }),
            )
            .await?;

        let next_player_id = players[(current_index + 1) % players.len()].id;
        self.store
            .update(
                LOBBIES,
                lobby_id,
                json!({
                    "gameState.currentPlayerTurn": next_player_id,
                    "gameState.lastDiceRoll": dice_roll,
                }),
            )
            .await?;

        let winner = (new_position == FINAL_SQUARE).then(|| current_player.name.clone());
        if let Some(name) = &winner {
            self.store
                .update(
                    LOBBIES,
                    lobby_id,
                    json!({
                        "status": LobbyStatus::Finished,
                        "gameState.winner": name,
                    }),
                )
                .await?;
            log::info!("{name} wins in lobby {lobby_id}");
        } else {
            log::debug!(
                "{} rolled {dice_roll}, moved to {new_position} in lobby {lobby_id}",
                current_player.name
            );
        }

        Ok(TurnOutcome {
            dice_roll,
            new_position,
            next_player_id,
            winner,
        })
    }

    /// Reset the board and hand the turn back to the host.
    ///
    /// Positions are zeroed with independent per-player writes joined
    /// concurrently; there is no atomicity across players.
    pub async fn restart_game(&self, lobby_id: LobbyId, players: &[Player]) -> GameResult<()> {
        let collection = players_collection(lobby_id);
        let resets = players
            .iter()
            .map(|p| self.store.update(&collection, p.id, json!({ "position": 0 })));
        try_join_all(resets).await?;

        let host = players
            .iter()
            .find(|p| p.is_host)
            .ok_or(GameError::HostNotFound(lobby_id))?;

        let game_state = GameState {
            current_player_turn: host.id,
            last_dice_roll: None,
            winner: None,
        };
        self.store
            .update(
                LOBBIES,
                lobby_id,
                json!({
                    "status": LobbyStatus::InProgress,
                    "gameState": game_state,
                }),
            )
            .await?;

        log::info!("lobby {lobby_id} restarted, {} moves first", host.name);
        Ok(())
    }

    async fn lobby_snapshot(&self, lobby_id: LobbyId) -> GameResult<Lobby> {
        let doc = self
            .store
            .get(LOBBIES, lobby_id)
            .await?
            .ok_or(GameError::LobbyNotFound(lobby_id))?;
        Ok(Lobby::from_document(&doc)?)
    }

    async fn players_snapshot(&self, lobby_id: LobbyId) -> GameResult<Vec<Player>> {
        let docs = self.store.list(&players_collection(lobby_id)).await?;
        docs.iter()
            .map(|doc| Player::from_document(doc).map_err(Into::into))
            .collect()
    }
}
