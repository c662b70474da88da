//! Runtime configuration, read from `SIX_CITIES_*` environment variables.

use crate::catalog::{SortMethod, DEFAULT_CITY};
use crate::logging::LogFormat;
use crate::state::SelectionState;
use std::time::Duration;
use thiserror::Error;

pub const ENV_API_URL: &str = "SIX_CITIES_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "SIX_CITIES_TIMEOUT_SECS";
pub const ENV_TOKEN: &str = "SIX_CITIES_TOKEN";
pub const ENV_CITY: &str = "SIX_CITIES_CITY";
pub const ENV_SORT: &str = "SIX_CITIES_SORT";
pub const ENV_LOG_LEVEL: &str = "SIX_CITIES_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "SIX_CITIES_LOG_FORMAT";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where offers and reviews are fetched from
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Sent as `X-Token` when present
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/six-cities".to_string(),
            timeout: Duration::from_secs(30),
            token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    /// Selection the session starts with
    pub selection: SelectionState,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            selection: SelectionState::default(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim_end_matches('/').to_string();
            if url.is_empty() {
                return Err(invalid(ENV_API_URL, url, "must not be empty"));
            }
            config.api.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .parse()
                .map_err(|err: std::num::ParseIntError| invalid(ENV_TIMEOUT_SECS, raw.clone(), err.to_string()))?;
            if secs == 0 {
                return Err(invalid(ENV_TIMEOUT_SECS, raw, "must be at least 1 second"));
            }
            config.api.timeout = Duration::from_secs(secs);
        }
        config.api.token = lookup(ENV_TOKEN).filter(|token| !token.is_empty());

        config.selection.city = lookup(ENV_CITY).unwrap_or_else(|| DEFAULT_CITY.name.to_string());
        if let Some(label) = lookup(ENV_SORT) {
            config.selection.sort = SortMethod::from_label(&label);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw
                .parse()
                .map_err(|reason| invalid(ENV_LOG_FORMAT, raw.clone(), reason))?;
        }

        Ok(config)
    }
}

fn invalid(key: &'static str, value: String, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value,
        reason: reason.into(),
    }
}
