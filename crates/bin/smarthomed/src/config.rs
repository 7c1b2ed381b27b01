//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `smarthome.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.
//!
//! The catalogue and house files it points at are optional too: a missing
//! catalogue falls back to the built-in one, a missing house file seeds
//! nothing.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use smarthome_adapter_components::default_catalogue_config;
use smarthome_app::seed::HouseSeed;
use smarthome_domain::catalogue::CatalogueConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Component catalogue source.
    pub catalogue: CatalogueSource,
    /// House description source.
    pub house: HouseSource,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Where the catalogue (`[models]` and `[functionalities]`) is read from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CatalogueSource {
    pub path: String,
}

/// Where the house seed (location, rooms, devices) is read from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HouseSource {
    pub path: String,
}

impl Config {
    /// Load configuration from `smarthome.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or a
    /// configured path is empty.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("smarthome.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        Ok(read_toml(path)?.unwrap_or_default())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SMARTHOME_CATALOGUE") {
            self.catalogue.path = val;
        }
        if let Ok(val) = std::env::var("SMARTHOME_HOUSE") {
            self.house.path = val;
        }
        if let Ok(val) = std::env::var("SMARTHOME_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.catalogue.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "catalogue path must not be empty".to_string(),
            ));
        }
        if self.house.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "house path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Read the catalogue file, or the built-in catalogue when it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn catalogue_config(&self) -> Result<CatalogueConfig, ConfigError> {
        match read_toml(&self.catalogue.path)? {
            Some(config) => Ok(config),
            None => {
                tracing::info!(path = %self.catalogue.path, "catalogue file not found, using built-in catalogue");
                Ok(default_catalogue_config())
            }
        }
    }

    /// Read the house seed, or an empty seed when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn house_seed(&self) -> Result<HouseSeed, ConfigError> {
        match read_toml(&self.house.path)? {
            Some(seed) => Ok(seed),
            None => {
                tracing::info!(path = %self.house.path, "house file not found, starting empty");
                Ok(HouseSeed::default())
            }
        }
    }
}

/// `Ok(None)` when the file does not exist.
fn read_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Option<T>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).map(Some).map_err(ConfigError::Parse),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ConfigError::Io(err)),
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthomed=info,smarthome_app=info".to_string(),
        }
    }
}

impl Default for CatalogueSource {
    fn default() -> Self {
        Self {
            path: "catalogue.toml".to_string(),
        }
    }
}

impl Default for HouseSource {
    fn default() -> Self {
        Self {
            path: "house.toml".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
