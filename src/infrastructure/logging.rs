//! Logging system configuration and initialization
//!
//! This module provides:
//! - Console logging on stderr
//! - Optional file logging through a non-blocking writer
//! - Optional structured JSON output
//! - Level control from configuration, overridable with `RUST_LOG`

#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

pub use crate::infrastructure::config::LoggingConfig;
use crate::infrastructure::config::defaults;

// Keeps the file writer alive for the life of the process
static LOG_GUARDS: Lazy<Mutex<Vec<WorkerGuard>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Log directory: the configured one, else `logs/` next to the executable
pub fn get_log_directory(config: &LoggingConfig) -> PathBuf {
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    exe_dir.join(defaults::LOG_DIR_NAME)
}

/// Build the level filter. `RUST_LOG` wins over the configuration.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    config_filter(config)
}

/// Level filter from the configuration alone: the global level plus the
/// per-module overrides
fn config_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_new(&config.level)
        .map_err(|e| anyhow!("Invalid log level '{}': {}", config.level, e))?;

    let mut modules: Vec<_> = config.module_filters.iter().collect();
    modules.sort();
    for (module, level) in modules {
        let directive = format!("{}={}", module, level)
            .parse::<Directive>()
            .map_err(|e| anyhow!("Invalid log filter for '{}': {}", module, e))?;
        filter = filter.add_directive(directive);
    }

    Ok(filter)
}

/// Initialize logging with custom configuration.
///
/// Fails instead of panicking if a global subscriber is already installed.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_env_filter(config)?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.console_output {
        let console_layer = fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_target(false);
        if config.json_format {
            layers.push(console_layer.json().boxed());
        } else {
            layers.push(console_layer.boxed());
        }
    }

    let log_dir = get_log_directory(config);
    if config.file_output {
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| anyhow!("Failed to create log directory {:?}: {}", log_dir, e))?;

        let file_appender = rolling::never(&log_dir, &config.file_name);
        let (file_writer, file_guard) = non_blocking(file_appender);
        LOG_GUARDS
            .lock()
            .map_err(|_| anyhow!("Log guard registry poisoned"))?
            .push(file_guard);

        let file_layer = fmt::Layer::new()
            .with_writer(file_writer)
            .with_target(true)
            .with_ansi(false);
        if config.json_format {
            layers.push(file_layer.json().boxed());
        } else {
            layers.push(file_layer.boxed());
        }
    }

    if layers.is_empty() {
        return Err(anyhow!("No logging output configured"));
    }

    Registry::default()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logging subscriber: {}", e))?;

    info!("Logging system initialized");
    info!("Log level: {}", config.level);
    info!("JSON format: {}", config.json_format);
    if config.file_output {
        info!("Log file: {:?}", log_dir.join(&config.file_name));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.console_output);
        assert!(!config.file_output);
        assert_eq!(config.module_filters.get("html5ever"), Some(&"warn".to_string()));
    }

    #[test]
    fn test_configured_log_directory() {
        let config = LoggingConfig {
            log_dir: Some(PathBuf::from("/tmp/profile-logs")),
            ..LoggingConfig::default()
        };
        assert_eq!(get_log_directory(&config), PathBuf::from("/tmp/profile-logs"));

        let default_dir = get_log_directory(&LoggingConfig::default());
        assert!(default_dir.ends_with(defaults::LOG_DIR_NAME));
    }

    #[test]
    fn test_env_filter_from_config() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        assert!(build_env_filter(&config).is_ok());
    }

    #[test]
    fn test_configured_level_reaches_crate_targets() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        let subscriber = Registry::default().with(config_filter(&config).unwrap());
        let (crate_debug, html5ever_info) = tracing::subscriber::with_default(subscriber, || {
            (
                tracing::enabled!(
                    target: "profile_parser::infrastructure::parsing::cache",
                    tracing::Level::DEBUG
                ),
                tracing::enabled!(target: "html5ever::tree_builder", tracing::Level::INFO),
            )
        });
        assert!(crate_debug);
        assert!(!html5ever_info);

        let subscriber = Registry::default().with(config_filter(&LoggingConfig::default()).unwrap());
        let crate_debug = tracing::subscriber::with_default(subscriber, || {
            tracing::enabled!(
                target: "profile_parser::infrastructure::parsing::document",
                tracing::Level::DEBUG
            )
        });
        assert!(!crate_debug);
    }

    #[test]
    fn test_no_output_is_rejected() {
        let config = LoggingConfig {
            console_output: false,
            file_output: false,
            ..LoggingConfig::default()
        };
        assert!(init_logging_with_config(&config).is_err());
    }
}
