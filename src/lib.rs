//! Take-rate pricing calculator
//!
//! Projects net revenue over a fixed monthly horizon under alternative
//! take-rate scenarios: a flat rate, or a stepped schedule where each rate
//! applies for a contiguous run of months. The core is two pure functions:
//! schedule expansion (one rate per month) and revenue aggregation
//! (per-month net, cumulative, and windowed sums for the summary table).

pub mod error;
pub mod report;
pub mod revenue;
pub mod scenario;
pub mod schedule;

pub use error::PricingError;
pub use revenue::{aggregate, RevenueProjection, SUMMARY_WINDOWS};
pub use scenario::{project, PricingConfig, PricingProjection, ScenarioConfig};
pub use schedule::RateSchedule;

/// Default projection horizon in months
pub const DEFAULT_HORIZON: u32 = 36;
