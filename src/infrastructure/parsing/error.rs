//! Parsing error re-export
//!
//! This module re-exports the profile parsing error types.

pub use crate::infrastructure::parsing_error::{ErrorTier, ParsingError, ParsingResult};
