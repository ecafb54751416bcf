//! Take-rate schedule construction and per-month expansion

mod generator;
mod parse;

pub use generator::{RateSchedule, RateStep};
pub use parse::{parse_period_list, parse_rate_list};
