//! Application configuration
//!
//! Settings live in `settings.yaml` inside the data directory. A missing or
//! unreadable file yields the defaults; unknown keys are ignored and missing
//! keys take their default value.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::ratings::DEFAULT_TOP_LIMIT;

/// Config file name
const CONFIG_FILENAME: &str = "settings.yaml";

/// Data directory name under the platform data dir
pub const APP_DIR_NAME: &str = "cocktail-cellar";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "COCKTAIL_DATA_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to create config directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Failed to write config file: {0}")]
    Write(std::io::Error),

    #[error("No data directory available on this platform")]
    NoDataDir,

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Cocktail Cellar settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Recipe API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Answer from the bundled samples when the API is unreachable
    #[serde(default)]
    pub fallback_to_samples: bool,

    /// Default length of the top-rated list
    #[serde(default = "default_top_rated_limit")]
    pub top_rated_limit: usize,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_top_rated_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            fallback_to_samples: false,
            top_rated_limit: default_top_rated_limit(),
        }
    }
}

impl AppConfig {
    /// Load the configuration from a data directory
    ///
    /// # Arguments
    /// * `config_dir` - Data directory path
    ///
    /// # Returns
    /// The stored configuration, or the defaults if the file is missing or broken
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Self::default();
        }

        let loaded = fs::read_to_string(&config_path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_yaml::from_str::<Self>(&content).map_err(|e| e.to_string()))
            .and_then(|config| config.validate().map(|_| config).map_err(|e| e.to_string()));

        match loaded {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "Ignoring unreadable settings");
                Self::default()
            }
        }
    }

    /// Save the configuration to a data directory
    ///
    /// # Arguments
    /// * `config_dir` - Data directory path
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ConfigError::CreateDir)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(ConfigError::Write)
    }

    /// Reject settings no client could work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base_url must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.top_rated_limit == 0 {
            return Err(ConfigError::Invalid("top_rated_limit must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Full path of the settings file
    pub fn get_config_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILENAME)
    }
}

/// Settings to change; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigUpdate {
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub fallback_to_samples: Option<bool>,
    pub top_rated_limit: Option<usize>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl AppConfig {
    /// Apply `update` to the stored settings and write them back
    ///
    /// # Returns
    /// The settings as saved; the file is left untouched when validation fails
    pub fn update(config_dir: &Path, update: &ConfigUpdate) -> Result<Self, ConfigError> {
        let mut config = Self::load(config_dir);

        if let Some(url) = &update.api_base_url {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(secs) = update.request_timeout_secs {
            config.request_timeout_secs = secs;
        }
        if let Some(fallback) = update.fallback_to_samples {
            config.fallback_to_samples = fallback;
        }
        if let Some(limit) = update.top_rated_limit {
            config.top_rated_limit = limit;
        }

        config.save(config_dir)?;
        info!(path = %Self::get_config_path(config_dir).display(), "Saved settings");
        Ok(config)
    }
}

/// Resolve the data directory: explicit override, else the platform data dir
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(dir) => Ok(dir),
        None => dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(ConfigError::NoDataDir),
    }
}
