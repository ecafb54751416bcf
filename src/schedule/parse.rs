//! Parsing of comma-separated rate and period input
//!
//! The original inputs are free-text fields like "30,20,15" (rates) and
//! "3,12" (period lengths). Parsing is all-or-nothing: one malformed entry
//! fails the whole list rather than truncating it.

use crate::error::PricingError;

/// Parse a comma-separated list of rate percentages, e.g. "30,20,15"
pub fn parse_rate_list(input: &str, field: &'static str) -> Result<Vec<f64>, PricingError> {
    input
        .split(',')
        .map(|entry| {
            entry
                .trim()
                .parse::<f64>()
                .map_err(|_| PricingError::ParseError {
                    field,
                    value: entry.trim().to_string(),
                })
        })
        .collect()
}

/// Parse a comma-separated list of period lengths in months, e.g. "3,12"
pub fn parse_period_list(input: &str, field: &'static str) -> Result<Vec<u32>, PricingError> {
    input
        .split(',')
        .map(|entry| {
            entry
                .trim()
                .parse::<u32>()
                .map_err(|_| PricingError::ParseError {
                    field,
                    value: entry.trim().to_string(),
                })
        })
        .collect()
}
