//! Lobby data models.
//!
//! Field names serialize in camelCase and status strings in kebab-case,
//! matching the stored document shape (`maxPlayers`, `isHost`,
//! `"in-progress"`). Document ids live outside the payload and are merged
//! back in when decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Document, DocumentId, FromDocument};

/// Lobby document id
pub type LobbyId = DocumentId;

/// Player document id
pub type PlayerId = DocumentId;

/// Maximum players per lobby
pub const MAX_PLAYERS: usize = 4;

/// Fixed palette assigned by join order: red, blue, green, yellow
pub const PLAYER_COLORS: [&str; MAX_PLAYERS] = ["#FF0000", "#0000FF", "#00FF00", "#FFFF00"];

/// Top-level collection holding lobby documents
pub(crate) const LOBBIES: &str = "lobbies";

/// Path of a lobby's nested players sub-collection
pub(crate) fn players_collection(lobby_id: LobbyId) -> String {
    format!("{LOBBIES}/{lobby_id}/players")
}

/// Lobby lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LobbyStatus {
    Waiting,
    InProgress,
    Finished,
}

impl std::fmt::Display for LobbyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LobbyStatus::Waiting => write!(f, "waiting"),
            LobbyStatus::InProgress => write!(f, "in-progress"),
            LobbyStatus::Finished => write!(f, "finished"),
        }
    }
}

/// A named game session container
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lobby {
    /// Store-assigned id, never persisted inside the document
    #[serde(skip)]
    pub id: LobbyId,
    pub name: String,
    pub status: LobbyStatus,
    pub max_players: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_state: Option<GameState>,
    pub created_at: DateTime<Utc>,
}

/// A participant in a lobby
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Store-assigned id, never persisted inside the document
    #[serde(skip)]
    pub id: PlayerId,
    pub name: String,
    pub is_ready: bool,
    pub is_host: bool,
    pub color: String,
    /// Board position, 0 through the terminal square 63
    pub position: u8,
}

/// In-progress game state embedded in the lobby document.
///
/// Replaced wholesale on start/restart, partially patched on turn.
/// `last_dice_roll` and `winner` serialize as explicit nulls when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub current_player_turn: PlayerId,
    pub last_dice_roll: Option<u8>,
    pub winner: Option<String>,
}

impl FromDocument for Lobby {
    fn from_document(doc: &Document) -> Result<Self, serde_json::Error> {
        let mut lobby: Lobby = serde_json::from_value(doc.data.clone())?;
        lobby.id = doc.id;
        Ok(lobby)
    }
}

impl FromDocument for Player {
    fn from_document(doc: &Document) -> Result<Self, serde_json::Error> {
        let mut player: Player = serde_json::from_value(doc.data.clone())?;
        player.id = doc.id;
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(LobbyStatus::InProgress).unwrap(),
            json!("in-progress")
        );
        assert_eq!(
            serde_json::to_value(LobbyStatus::Waiting).unwrap(),
            json!("waiting")
        );
        assert_eq!(
            serde_json::to_value(LobbyStatus::Finished).unwrap(),
            json!("finished")
        );
    }

    #[test]
    fn test_lobby_document_shape() {
        let lobby = Lobby {
            id: LobbyId::new_v4(),
            name: "Foo".to_string(),
            status: LobbyStatus::Waiting,
            max_players: MAX_PLAYERS,
            game_state: None,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&lobby).unwrap();

        // camelCase field names, id left out, absent gameState omitted
        assert_eq!(value["maxPlayers"], json!(4));
        assert!(value.get("id").is_none());
        assert!(value.get("gameState").is_none());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_player_document_shape() {
        let player = Player {
            id: PlayerId::new_v4(),
            name: "Alice".to_string(),
            is_ready: true,
            is_host: true,
            color: PLAYER_COLORS[0].to_string(),
            position: 0,
        };
        let value = serde_json::to_value(&player).unwrap();

        assert_eq!(value["isHost"], json!(true));
        assert_eq!(value["isReady"], json!(true));
        assert_eq!(value["color"], json!("#FF0000"));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_game_state_keeps_explicit_nulls() {
        let state = GameState {
            current_player_turn: PlayerId::new_v4(),
            last_dice_roll: None,
            winner: None,
        };
        let value = serde_json::to_value(&state).unwrap();

        assert_eq!(value["lastDiceRoll"], json!(null));
        assert_eq!(value["winner"], json!(null));
    }

    #[test]
    fn test_from_document_merges_id() {
        let id = LobbyId::new_v4();
        let doc = Document {
            id,
            data: json!({
                "name": "Foo",
                "status": "in-progress",
                "maxPlayers": 4,
                "createdAt": Utc::now(),
            }),
        };

        let lobby = Lobby::from_document(&doc).unwrap();
        assert_eq!(lobby.id, id);
        assert_eq!(lobby.status, LobbyStatus::InProgress);
        assert!(lobby.game_state.is_none());
    }
}
