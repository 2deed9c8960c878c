//! Profile configuration.

use std::{env, path::PathBuf};

/// Profile configuration
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// Scratchpad file location
    pub scratchpad_path: PathBuf,

    /// Key namespace, prefixed to every scratchpad key
    pub namespace: String,
}

impl ProfileConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `GOOSE_SCRATCHPAD_PATH`: scratchpad file (default: `.rogue_goose/scratchpad.json`)
    /// - `GOOSE_NAMESPACE`: key namespace (default: `rogue-goose`)
    pub fn from_env() -> Self {
        Self {
            scratchpad_path: env::var("GOOSE_SCRATCHPAD_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".rogue_goose/scratchpad.json")),
            namespace: env::var("GOOSE_NAMESPACE").unwrap_or_else(|_| "rogue-goose".to_string()),
        }
    }

    /// Default configuration for development
    pub fn development() -> Self {
        Self {
            scratchpad_path: PathBuf::from(".rogue_goose/scratchpad.json"),
            namespace: "rogue-goose".to_string(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self::development()
    }
}
