//! Parsing error types for profile field extraction
//!
//! Errors fall into three tiers: a required field that could not be found,
//! markup structure that an accessor depends on but is absent or malformed,
//! and configuration problems with the selector tables.

use thiserror::Error;

use crate::domain::profile::ProfileField;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("Required field '{field}' not found in profile HTML")]
    RequiredFieldMissing {
        field: ProfileField,
        context: Option<String>,
    },

    #[error("Field '{field}' depends on missing markup: {structure}")]
    StructureMissing {
        field: ProfileField,
        structure: String,
    },

    #[error("Malformed input for field '{field}': {reason}")]
    MalformedInput { field: ProfileField, reason: String },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector {
        selector: String,
        reason: String,
        alternatives: Vec<String>,
    },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String, field: String },
}

/// Coarse classification of a [`ParsingError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTier {
    /// A field the profile cannot be summarized without
    Required,
    /// Precondition markup missing; callers may treat this as a signal
    Structural,
    /// Selector tables or settings are unusable
    Configuration,
}

impl ParsingError {
    /// Create a required field missing error with context
    pub fn required_field_missing(field: ProfileField, context: Option<&str>) -> Self {
        Self::RequiredFieldMissing {
            field,
            context: context.map(ToString::to_string),
        }
    }

    pub fn structure_missing(field: ProfileField, structure: &str) -> Self {
        Self::StructureMissing {
            field,
            structure: structure.to_string(),
        }
    }

    pub fn malformed_input(field: ProfileField, reason: &str) -> Self {
        Self::MalformedInput {
            field,
            reason: reason.to_string(),
        }
    }

    /// Create an invalid selector error with alternatives
    pub fn invalid_selector(selector: &str, reason: &str, alternatives: Vec<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
            alternatives,
        }
    }

    /// Create a configuration error for a named setting
    pub fn configuration_error(field: &str, message: &str) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.to_string(),
        }
    }

    pub const fn tier(&self) -> ErrorTier {
        match self {
            Self::RequiredFieldMissing { .. } => ErrorTier::Required,
            Self::StructureMissing { .. } | Self::MalformedInput { .. } => ErrorTier::Structural,
            Self::InvalidSelector { .. } | Self::ConfigurationError { .. } => {
                ErrorTier::Configuration
            }
        }
    }

    /// Field the error was raised for, if any
    pub const fn field(&self) -> Option<ProfileField> {
        match self {
            Self::RequiredFieldMissing { field, .. }
            | Self::StructureMissing { field, .. }
            | Self::MalformedInput { field, .. } => Some(*field),
            Self::InvalidSelector { .. } | Self::ConfigurationError { .. } => None,
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
