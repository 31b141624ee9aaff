use std::{fs, path::Path};

use tracing::{debug, info, instrument};

use super::{Config, ConfigPaths};
use crate::{PodplayerError, Result};

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    /// Returns `PodplayerError::TomlParseError` if the text is not a valid configuration
    pub fn from_toml_str(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| PodplayerError::toml_parse(e, None))
    }

    /// Loads a configuration file from disk.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not parse
    #[instrument]
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| PodplayerError::io_at(e, path))?;
        let config = toml::from_str(&content).map_err(|e| PodplayerError::toml_parse(e, Some(path)))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the configuration at `path`, or the defaults if no file exists there.
    ///
    /// # Errors
    /// Returns error if an existing file cannot be read or does not parse
    pub fn load_or_default(path: &Path) -> Result<Config> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Loads the main configuration file from the XDG config directory.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be resolved or the file is invalid
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_or_default(&path)
    }
}
