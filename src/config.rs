//! Configuration management for the contact directory.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::domain::MAX_NAME_LENGTH;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing::level_filters::LevelFilter;

/// Configuration for the contact directory binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Longest accepted contact name in characters (default: 49, max: 49)
    pub max_name_length: usize,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_MAX_NAME_LENGTH`: Longest accepted name (default: 49)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy doesn't print to stdout, which the menu owns
        let _ = dotenvy::dotenv();

        let max_name_length = Self::parse_env_usize("CONTACTS_MAX_NAME_LENGTH", MAX_NAME_LENGTH)?;

        if max_name_length == 0 || max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_MAX_NAME_LENGTH".to_string(),
                reason: format!("Must be between 1 and {}", MAX_NAME_LENGTH),
            });
        }

        let log_level = env::var("LOG_LEVEL")
            .map(|val| val.trim().to_ascii_lowercase())
            .unwrap_or_else(|_| "error".to_string());

        if log_level.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        if log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!(
                    "Must be one of off, error, warn, info, debug, trace; got: {}",
                    log_level
                ),
            });
        }

        Ok(Config {
            max_name_length,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_name_length: MAX_NAME_LENGTH,
            log_level: "error".to_string(),
        }
    }
}
