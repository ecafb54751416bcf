//! Error taxonomy for configuration and aggregation
//!
//! All validation happens while the configuration is built, before any
//! aggregation runs. The core is all-or-nothing: a valid full schedule or
//! a specific error, never a truncated or partially-recovered one.

use thiserror::Error;

/// Errors produced by schedule construction and revenue aggregation
#[derive(Debug, Error)]
pub enum PricingError {
    /// Malformed comma-separated numeric input
    #[error("failed to parse {field}: '{value}' is not a valid number")]
    ParseError { field: &'static str, value: String },

    /// Mismatched rate/period list lengths or otherwise unusable schedule
    #[error("invalid schedule configuration: {0}")]
    ConfigurationError(String),

    /// Gross revenue and rate sequences of different length
    #[error("dimension mismatch: {gross} gross values vs {rates} rate values")]
    DimensionMismatch { gross: usize, rates: usize },

    /// Negative rate, negative gross revenue, or out-of-range value
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
