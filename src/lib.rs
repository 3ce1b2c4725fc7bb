//! Profile Parser - typed field extraction from saved profile pages
//!
//! A saved social-network profile snapshot goes in, typed values come out:
//! name, skills, employment, connections, bio, accomplishments and more.
//! Fetching pages and expanding collapsed sections happen elsewhere.

// Module declarations
pub mod domain;
pub mod infrastructure;

// Re-export the extraction entry points for easier access
pub use domain::profile::{AccomplishmentKind, MediaCount, ProfileField, ProfileSummary};
pub use infrastructure::parsing::{ParsingError, ParsingResult, ProfileExtractor, ProfileRules};
