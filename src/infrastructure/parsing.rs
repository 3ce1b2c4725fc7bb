//! HTML parsing infrastructure for profile snapshots
//!
//! Selector tables (`config`) are compiled into rules (`rules`), evaluated
//! against a parsed `document`, and exposed field by field through
//! `ProfileExtractor` with per-instance memoization (`cache`).

pub mod cache;
pub mod config;
pub mod document;
pub mod error;
pub mod profile_extractor;
pub mod rules;
pub mod sanitize;

// Re-export public types
pub use cache::FieldCache;
pub use self::config::ProfileSelectors;
pub use document::Document;
pub use error::{ErrorTier, ParsingError, ParsingResult};
pub use profile_extractor::ProfileExtractor;
pub use rules::{FieldPattern, ProfileRules};
