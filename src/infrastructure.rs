//! Infrastructure layer for HTML parsing, configuration and logging

pub mod config; // Configuration loading and defaults
pub mod logging; // Logging infrastructure
pub mod parsing; // Profile extraction
pub mod parsing_error; // Error types

// Re-export commonly used items
pub use self::config::{AppConfig, ConfigError, LoggingConfig};
pub use logging::{get_log_directory, init_logging_with_config};
pub use parsing::{
    ErrorTier, ParsingError, ParsingResult, ProfileExtractor, ProfileRules, ProfileSelectors,
};
