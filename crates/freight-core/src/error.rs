//! # Validation Errors
//!
//! Construction failures for the domain newtypes. Each variant carries the
//! rejected input so operators can see what the caller actually sent.

use thiserror::Error;

/// A domain value failed its format or range check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// MC number is empty or contains a non-digit character.
    #[error("invalid MC number format: \"{0}\" (expected decimal digits only)")]
    InvalidMcNumber(String),

    /// Requested result cap is outside the accepted range.
    #[error("max_results must be between {min} and {max}, got {value}")]
    MaxResultsOutOfRange {
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: u8,
        /// Largest accepted value.
        max: u8,
    },
}
