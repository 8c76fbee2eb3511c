//! User settings loaded from `config.toml`
//!
//! Looked up at `{config-dir}/nova/config.toml` unless a path is given.
//! A missing file means defaults; every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flashcards::time_ago::is_valid_date_format;
use crate::flashcards::{DEFAULT_DATE_FORMAT, RECENT_DECK_LIMIT, RECOMMENDED_DECK_LIMIT};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    /// Where the JSON records live (defaults to the platform data dir)
    pub data_dir: Option<PathBuf>,
    /// strftime pattern for timestamps older than a week
    pub date_format: String,
    pub recent_deck_limit: usize,
    pub recommended_deck_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            recent_deck_limit: RECENT_DECK_LIMIT,
            recommended_deck_limit: RECOMMENDED_DECK_LIMIT,
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nova").join(CONFIG_FILE_NAME))
    }

    /// Load from `path`, or the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => {
                log::debug!("No config directory on this platform; using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let settings = Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse { path: path.clone(), source },
            other => other,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_date_format(&self.date_format) {
            return Err(ConfigError::Invalid(format!(
                "date_format '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }
        if self.recent_deck_limit == 0 {
            return Err(ConfigError::Invalid(
                "recent_deck_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
