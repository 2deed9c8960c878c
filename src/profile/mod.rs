//! Local player profile: the remembered display name.
//!
//! One string of client-side convenience state, kept under
//! `"<namespace>-player-name"` in a persistent scratchpad so the display name
//! survives restarts. Process-wide with an explicit lifecycle: loaded from
//! the scratchpad on construction, written through on set, cleared on demand.

use std::sync::{Arc, RwLock};

pub mod config;
pub mod errors;
pub mod scratchpad;

pub use config::ProfileConfig;
pub use errors::{ProfileError, ProfileResult};
pub use scratchpad::{FileScratchpad, MemoryScratchpad, Scratchpad};

/// Process-wide remembered player name
pub struct PlayerProfile {
    scratchpad: Arc<dyn Scratchpad>,
    key: String,
    name: RwLock<Option<String>>,
}

impl PlayerProfile {
    /// Load the profile, reading any remembered name from the scratchpad
    pub fn load(scratchpad: Arc<dyn Scratchpad>, config: &ProfileConfig) -> ProfileResult<Self> {
        let key = format!("{}-player-name", config.namespace);
        let name = scratchpad.get(&key)?;
        Ok(Self {
            scratchpad,
            key,
            name: RwLock::new(name),
        })
    }

    /// Currently remembered display name
    pub fn player_name(&self) -> Option<String> {
        self.name.read().map(|name| name.clone()).unwrap_or_default()
    }

    /// Remember a display name, writing it through to the scratchpad
    pub fn set_player_name(&self, name: &str) -> ProfileResult<()> {
        self.scratchpad.set(&self.key, name)?;
        *self.name.write().map_err(|_| ProfileError::Poisoned)? = Some(name.to_string());
        Ok(())
    }

    /// Forget the display name, removing it from the scratchpad
    pub fn clear_player_name(&self) -> ProfileResult<()> {
        self.scratchpad.remove(&self.key)?;
        *self.name.write().map_err(|_| ProfileError::Poisoned)? = None;
        Ok(())
    }
}
