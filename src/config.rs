//! Application configuration.
//!
//! Settings are read from a JSON file (missing file means defaults), then
//! command-line overrides are applied on top, then the merged result is
//! validated. Only a valid configuration ever reaches the refresh loop.

use crate::consts::cli_consts::{
    DEFAULT_BASE_URL, DEFAULT_DB_PATH, MEMORY_WARNING_PERCENT, STALE_AFTER_FAILURES, timing,
};
use crate::keys::is_valid_validator_pubkey;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("Config file error: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid JSON for this schema.
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required setting has no value.
    #[error("Missing required setting `{0}`")]
    Missing(&'static str),

    #[error("Invalid base URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid validator public key `{0}`: expected 0x followed by 96 hex digits")]
    InvalidPubkey(String),

    #[error("Setting `{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: u64 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the beacon node HTTP API.
    pub base_url: String,
    /// Directory whose total size is reported as the database size.
    pub db_path: PathBuf,
    /// Public key of the validator whose balance is displayed.
    pub validator_pubkey: String,
    pub refresh_interval_secs: u64,
    pub request_timeout_ms: u64,
    pub dbsize_timeout_secs: u64,
    /// Memory usage (percent) at or above which the gauge shows the warning color.
    pub memory_warning_percent: u16,
    /// Consecutive failures before a field is marked stale.
    pub stale_after_failures: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            validator_pubkey: String::new(),
            refresh_interval_secs: timing::REFRESH_INTERVAL_SECS,
            request_timeout_ms: timing::REQUEST_TIMEOUT_MS,
            dbsize_timeout_secs: timing::DBSIZE_TIMEOUT_SECS,
            memory_warning_percent: MEMORY_WARNING_PERCENT,
            stale_after_failures: STALE_AFTER_FAILURES,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub db_path: Option<PathBuf>,
    pub validator_pubkey: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub dbsize_timeout_secs: Option<u64>,
    pub memory_warning_percent: Option<u16>,
    pub stale_after_failures: Option<u32>,
}

/// Default location of the config file: `~/.lightdash/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::Missing("home directory"))?;
    Ok(home.join(".lightdash").join("config.json"))
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a `ConfigError` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the file if it exists, applies overrides, and validates the result.
    pub fn resolve(path: &Path, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(db_path) = overrides.db_path {
            self.db_path = db_path;
        }
        if let Some(pubkey) = overrides.validator_pubkey {
            self.validator_pubkey = pubkey;
        }
        if let Some(secs) = overrides.refresh_interval_secs {
            self.refresh_interval_secs = secs;
        }
        if let Some(ms) = overrides.request_timeout_ms {
            self.request_timeout_ms = ms;
        }
        if let Some(secs) = overrides.dbsize_timeout_secs {
            self.dbsize_timeout_secs = secs;
        }
        if let Some(percent) = overrides.memory_warning_percent {
            self.memory_warning_percent = percent;
        }
        if let Some(failures) = overrides.stale_after_failures {
            self.stale_after_failures = failures;
        }
    }

    /// Check every setting. Any failure here is fatal at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Missing("base_url"));
        }
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme `{}`", url.scheme()),
            });
        }

        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::Missing("db_path"));
        }

        if self.validator_pubkey.is_empty() {
            return Err(ConfigError::Missing("validator_pubkey"));
        }
        if !is_valid_validator_pubkey(&self.validator_pubkey) {
            return Err(ConfigError::InvalidPubkey(self.validator_pubkey.clone()));
        }

        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::OutOfRange {
                field: "refresh_interval_secs",
                value: 0,
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "request_timeout_ms",
                value: 0,
            });
        }
        if self.dbsize_timeout_secs == 0 {
            return Err(ConfigError::OutOfRange {
                field: "dbsize_timeout_secs",
                value: 0,
            });
        }
        if !(1..=100).contains(&self.memory_warning_percent) {
            return Err(ConfigError::OutOfRange {
                field: "memory_warning_percent",
                value: self.memory_warning_percent as u64,
            });
        }
        if self.stale_after_failures == 0 {
            return Err(ConfigError::OutOfRange {
                field: "stale_after_failures",
                value: 0,
            });
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn dbsize_timeout(&self) -> Duration {
        Duration::from_secs(self.dbsize_timeout_secs)
    }
}
