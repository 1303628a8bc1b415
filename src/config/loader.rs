use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/flagpacks/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("flagpacks").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `min_members` is at least 1
    /// - every service URL is http(s)
    /// - a configured DID has the `did:` prefix
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.packs.min_members == 0 {
            return Err(ConfigError::ValidationError {
                message: "packs.min_members must be at least 1".to_string(),
            });
        }

        let urls = [
            ("service.pds_url", &self.service.pds_url),
            ("service.appview_url", &self.service.appview_url),
            ("service.entryway_url", &self.service.entryway_url),
        ];
        for (key, url) in urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be an http(s) URL, got '{}'", key, url),
                });
            }
        }

        let did = &self.account.did;
        if !did.is_empty() && !did.starts_with("did:") {
            return Err(ConfigError::ValidationError {
                message: format!("account.did '{}' is not a DID", did),
            });
        }

        Ok(())
    }

    /// The account DID, required by every command that writes records.
    pub fn require_did(&self) -> Result<&str, ConfigError> {
        if self.account.did.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "account.did must be set to publish starter packs".to_string(),
            });
        }
        Ok(&self.account.did)
    }
}
