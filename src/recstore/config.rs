use crate::error::{RecstoreError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// How malformed JSON (in the backing file or in an `--item` payload) is
/// treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatPolicy {
    /// Fail with a format error.
    #[default]
    Strict,
    /// Read a malformed file as an empty collection and a malformed item as
    /// an empty record.
    Lenient,
}

/// Configuration for recstore, stored as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecstoreConfig {
    #[serde(default)]
    pub format_policy: FormatPolicy,

    /// Write to a temporary sibling file and rename it over the target
    /// instead of truncating in place.
    #[serde(default)]
    pub atomic_writes: bool,
}

impl RecstoreConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(RecstoreError::Io)?;
        let config: RecstoreConfig =
            serde_json::from_str(&content).map_err(RecstoreError::Format)?;
        Ok(config)
    }

    /// Platform default location, e.g. `~/.config/recstore/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "recstore", "recstore")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }
}
