//! Configuration infrastructure
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional configuration file (any format the `config` crate detects from
//! the extension), and `PROFILE_PARSER__*` environment variables such as
//! `PROFILE_PARSER__LOGGING__LEVEL=debug`.

#![allow(clippy::uninlined_format_args)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::infrastructure::parsing::ProfileSelectors;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "PROFILE_PARSER";

pub mod defaults {
    pub const LOG_LEVEL: &str = "info";
    pub const LOG_JSON_FORMAT: bool = false;
    pub const LOG_CONSOLE_OUTPUT: bool = true;
    pub const LOG_FILE_OUTPUT: bool = false;
    pub const LOG_FILE_NAME: &str = "profile-parser.log";
    pub const LOG_DIR_NAME: &str = "logs";
    pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {source}")]
    Load {
        #[from]
        source: config::ConfigError,
    },

    #[error("Configuration validation failed: {message}")]
    Validation { message: String },
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,

    /// Selector tables used to build extraction rules
    pub selectors: ProfileSelectors,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output (stderr, so stdout stays clean for data)
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for log files; defaults to `logs/` next to the executable
    pub log_dir: Option<PathBuf>,

    pub file_name: String,

    /// Module-specific log level filters (e.g., "html5ever": "warn")
    pub module_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            log_dir: None,
            file_name: defaults::LOG_FILE_NAME.to_string(),
            module_filters: {
                let mut filters = HashMap::new();
                filters.insert("html5ever".to_string(), "warn".to_string());
                filters.insert("selectors".to_string(), "warn".to_string());
                filters
            },
        }
    }
}

impl AppConfig {
    /// Load from a configuration file plus environment overrides
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::load(Some(path))
    }

    /// Load defaults, an optional file and environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        if let Some(path) = path {
            info!("Loaded configuration from {:?}", path);
        }
        Ok(config)
    }

    /// Validate log settings and selector tables
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_lowercase();
        if !defaults::LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation {
                message: format!("unknown log level '{}'", self.logging.level),
            });
        }

        if !self.logging.console_output && !self.logging.file_output {
            return Err(ConfigError::Validation {
                message: "at least one of console_output or file_output must be enabled".to_string(),
            });
        }

        for (name, list) in self.selectors.selector_lists() {
            if list.is_empty() {
                return Err(ConfigError::Validation {
                    message: format!("selector list '{}' must not be empty", name),
                });
            }
        }

        if self.selectors.username_marker.is_empty() {
            return Err(ConfigError::Validation {
                message: "username_marker must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
