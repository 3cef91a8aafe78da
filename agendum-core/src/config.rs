//! Global agendum configuration.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{AgendumError, AgendumResult};

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("agendum")
}

/// Global configuration at ~/.config/agendum/config.toml
///
/// A missing config file is fine; everything has a default.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    /// Directory holding the event snapshot
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> AgendumResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendumError::Config("Could not determine config directory".into()))?
            .join("agendum");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> AgendumResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|err| AgendumError::Config(err.to_string()))
    }

    /// The single snapshot slot all events persist to.
    pub fn events_path(&self) -> PathBuf {
        self.data_dir.join("events.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_path_lives_under_data_dir() {
        let config = GlobalConfig {
            data_dir: PathBuf::from("/tmp/agendum-test"),
        };
        assert_eq!(
            config.events_path(),
            PathBuf::from("/tmp/agendum-test/events.json")
        );
    }

    #[test]
    fn test_parses_data_dir_override() {
        let config: GlobalConfig = toml::from_str("data_dir = \"/srv/calendar\"").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/calendar"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, default_data_dir());
    }
}
