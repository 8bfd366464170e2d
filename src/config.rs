//! Client configuration
//!
//! JSON file with the catalog location, the log filter and the actor roster
//! with starting items. Looked up at an explicit path, else in the user's
//! config directory, else built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::item::ItemId;

/// Directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "pocket_rogue";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Path of the item catalog JSON
    pub catalog_path: PathBuf,

    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub log_filter: String,

    /// Actors available to control, first one is controlled at startup
    pub actors: Vec<ActorConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorConfig {
    pub name: String,
    #[serde(default)]
    pub items: Vec<StartingItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartingItem {
    pub id: ItemId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl Default for ClientConfig {
    fn default() -> Self {
        let starting = |id, quantity| StartingItem { id, quantity };

        ClientConfig {
            catalog_path: PathBuf::from("assets/item_definitions.json"),
            log_filter: String::from("info"),
            actors: vec![
                ActorConfig {
                    name: String::from("Hero"),
                    items: vec![starting(0, 1), starting(1, 1), starting(6, 25)],
                },
                ActorConfig {
                    name: String::from("Ranger"),
                    items: vec![starting(2, 1), starting(7, 150_000), starting(3, 1)],
                },
            ],
        }
    }
}

impl ClientConfig {
    /// Loads a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` if given, else the default location if it exists,
    /// else the built-in defaults
    ///
    /// An explicit path that can't be read is an error.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "Using config file");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/pocket_rogue/config.json`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "log_filter": "debug", "actors": [{{ "name": "Solo", "items": [{{ "id": 4 }}] }}] }}"#
        )
        .unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.catalog_path, ClientConfig::default().catalog_path);
        assert_eq!(config.actors.len(), 1);
        assert_eq!(config.actors[0].items, vec![StartingItem { id: 4, quantity: 1 }]);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2").unwrap();

        assert!(matches!(
            ClientConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let missing = Path::new("/no/such/dir/config.json");
        assert!(matches!(
            ClientConfig::load_or_default(Some(missing)),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_default_roster() {
        let config = ClientConfig::default();
        assert_eq!(config.actors[0].name, "Hero");
        assert!(!config.actors[0].items.is_empty());
    }
}
