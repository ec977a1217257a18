use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::replace::ReplaceBehavior;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options shared by every paste.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteSettings {
    pub replace_behavior: ReplaceBehavior,
    pub notify_neighbors: bool,
    /// Global switch on top of the per-placement entity flags.
    pub place_entities: bool,
}

impl Default for PasteSettings {
    fn default() -> Self {
        Self {
            replace_behavior: ReplaceBehavior::None,
            notify_neighbors: false,
            place_entities: true,
        }
    }
}

impl PasteSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
