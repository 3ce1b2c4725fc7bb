//! Domain module - profile entities and value objects

pub mod profile;

// Re-export commonly used items for convenience
pub use profile::{
    AccomplishmentKind, CERTIFICATION_SENTINEL, MediaCount, ProfileField, ProfileSummary,
};
