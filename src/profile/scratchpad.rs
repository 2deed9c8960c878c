//! Client-local persistent key-value scratchpad.

use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::Mutex,
};

use super::errors::{ProfileError, ProfileResult};

/// Persistent string key-value scratchpad, localStorage-style.
///
/// Synchronous by design: this is client-side convenience state, not part of
/// the shared document store.
pub trait Scratchpad: Send + Sync {
    fn get(&self, key: &str) -> ProfileResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ProfileResult<()>;
    fn remove(&self, key: &str) -> ProfileResult<()>;
}

/// File-backed scratchpad storing entries as one JSON object.
///
/// Entries are loaded once on open and written through on every change.
pub struct FileScratchpad {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileScratchpad {
    /// Open a scratchpad at `path`, loading existing entries if present
    pub fn open(path: impl Into<PathBuf>) -> ProfileResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> ProfileResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl Scratchpad for FileScratchpad {
    fn get(&self, key: &str) -> ProfileResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| ProfileError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ProfileResult<()> {
        let mut entries = self.entries.lock().map_err(|_| ProfileError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> ProfileResult<()> {
        let mut entries = self.entries.lock().map_err(|_| ProfileError::Poisoned)?;
        entries.remove(key);
        self.flush(&entries)
    }
}

/// In-memory scratchpad for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryScratchpad {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryScratchpad {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scratchpad for MemoryScratchpad {
    fn get(&self, key: &str) -> ProfileResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| ProfileError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ProfileResult<()> {
        let mut entries = self.entries.lock().map_err(|_| ProfileError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ProfileResult<()> {
        let mut entries = self.entries.lock().map_err(|_| ProfileError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{name}-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_file_scratchpad_round_trip() {
        let path = temp_path("scratchpad-round-trip");
        let pad = FileScratchpad::open(&path).unwrap();

        assert_eq!(pad.get("k").unwrap(), None);
        pad.set("k", "v").unwrap();
        assert_eq!(pad.get("k").unwrap(), Some("v".to_string()));
        pad.remove("k").unwrap();
        assert_eq!(pad.get("k").unwrap(), None);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_file_scratchpad_persists_across_opens() {
        let path = temp_path("scratchpad-persist");

        let pad = FileScratchpad::open(&path).unwrap();
        pad.set("rogue-goose-player-name", "Alice").unwrap();
        drop(pad);

        let pad = FileScratchpad::open(&path).unwrap();
        assert_eq!(
            pad.get("rogue-goose-player-name").unwrap(),
            Some("Alice".to_string())
        );

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_memory_scratchpad() {
        let pad = MemoryScratchpad::new();
        pad.set("a", "1").unwrap();
        assert_eq!(pad.get("a").unwrap(), Some("1".to_string()));
        pad.remove("a").unwrap();
        assert_eq!(pad.get("a").unwrap(), None);
    }
}
