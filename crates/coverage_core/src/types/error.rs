//! Error types for structured error handling.
//!
//! The coverage engine and scenario evaluator are total over their
//! preconditions and never fail. Errors only arise when building a
//! configuration or state from untrusted input (config files, CLI flags).

use thiserror::Error;

/// Errors raised while constructing coverage inputs.
///
/// # Variants
/// - `OutOfRange`: A bounded setting lies outside its allowed range
/// - `NegativeAmount`: A monetary field is negative
/// - `DuplicateChannel`: Two channels share the same identifier
/// - `UnknownChannel`: A strict lookup did not find the channel
///
/// # Examples
/// ```
/// use coverage_core::types::CoverageError;
///
/// let err = CoverageError::UnknownChannel("brokerage".to_string());
/// assert_eq!(format!("{}", err), "Unknown coverage channel: brokerage");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoverageError {
    /// A bounded setting lies outside its allowed range.
    #[error("{field} = {value} outside allowed range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending setting
        field: String,
        /// Value that was supplied
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// A monetary field is negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount {
        /// Name of the offending field
        field: String,
        /// Value that was supplied
        value: f64,
    },

    /// Two channels share the same identifier.
    #[error("Duplicate coverage channel id: {0}")]
    DuplicateChannel(String),

    /// No channel with the given identifier exists.
    #[error("Unknown coverage channel: {0}")]
    UnknownChannel(String),
}

impl CoverageError {
    /// Create an out-of-range error
    pub fn out_of_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Create a negative-amount error
    pub fn negative(field: impl Into<String>, value: f64) -> Self {
        Self::NegativeAmount {
            field: field.into(),
            value,
        }
    }
}
