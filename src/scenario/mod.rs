//! Scenario configuration and the three-scenario projection driver
//!
//! A scenario is one take-rate configuration, static or stepped, evaluated
//! against the shared gross revenue stream. The three scenarios are
//! independent; changing one never affects another's output.

use serde::{Deserialize, Serialize};

use crate::error::PricingError;
use crate::revenue::{aggregate, RevenueProjection};
use crate::schedule::{parse_period_list, parse_rate_list, RateSchedule};
use crate::DEFAULT_HORIZON;

/// One take-rate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioConfig {
    /// A single rate applied to every month
    Static { rate: f64 },
    /// Stepped rates, each applying for a contiguous run of months; the
    /// remainder of the horizon reuses the last rate
    Stepped { rates: Vec<f64>, periods: Vec<u32> },
}

impl ScenarioConfig {
    /// Build a stepped scenario from raw comma-separated input strings
    pub fn stepped_from_strs(
        rates: &str,
        periods: &str,
        rates_field: &'static str,
        periods_field: &'static str,
    ) -> Result<Self, PricingError> {
        Ok(Self::Stepped {
            rates: parse_rate_list(rates, rates_field)?,
            periods: parse_period_list(periods, periods_field)?,
        })
    }

    /// Build the immutable schedule for this scenario
    pub fn schedule(&self, horizon: u32) -> Result<RateSchedule, PricingError> {
        match self {
            Self::Static { rate } => RateSchedule::flat(*rate),
            Self::Stepped { rates, periods } => RateSchedule::stepped(rates, periods, horizon),
        }
    }
}

/// Full calculator configuration: gross revenue, horizon, three scenarios
///
/// Defaults match the original calculator inputs: $6,000 monthly gross,
/// a static 20% scenario, and two stepped scenarios (30/20/15 and 35/25/15
/// over 3- and 12-month opening periods).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Monthly gross revenue, applied uniformly across the horizon
    #[serde(default = "default_gross_revenue")]
    pub gross_revenue: f64,

    /// Projection horizon in months
    #[serde(default = "default_horizon")]
    pub horizon: u32,

    #[serde(default = "default_scenario_one")]
    pub scenario_one: ScenarioConfig,

    #[serde(default = "default_scenario_two")]
    pub scenario_two: ScenarioConfig,

    #[serde(default = "default_scenario_three")]
    pub scenario_three: ScenarioConfig,
}

fn default_gross_revenue() -> f64 { 6000.0 }
fn default_horizon() -> u32 { DEFAULT_HORIZON }
fn default_scenario_one() -> ScenarioConfig {
    ScenarioConfig::Static { rate: 20.0 }
}
fn default_scenario_two() -> ScenarioConfig {
    ScenarioConfig::Stepped {
        rates: vec![30.0, 20.0, 15.0],
        periods: vec![3, 12],
    }
}
fn default_scenario_three() -> ScenarioConfig {
    ScenarioConfig::Stepped {
        rates: vec![35.0, 25.0, 15.0],
        periods: vec![3, 12],
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            gross_revenue: default_gross_revenue(),
            horizon: default_horizon(),
            scenario_one: default_scenario_one(),
            scenario_two: default_scenario_two(),
            scenario_three: default_scenario_three(),
        }
    }
}

impl PricingConfig {
    /// Validate the shared inputs before any aggregation runs
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.gross_revenue < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "gross revenue {} is negative",
                self.gross_revenue
            )));
        }
        if self.horizon == 0 {
            return Err(PricingError::InvalidInput(
                "horizon must be at least one month".to_string(),
            ));
        }
        Ok(())
    }
}

/// One evaluated scenario: its expanded rates and derived revenue series
#[derive(Debug, Clone)]
pub struct ScenarioProjection {
    pub name: String,
    pub monthly_rates: Vec<f64>,
    pub revenue: RevenueProjection,
}

/// Projection output for all three scenarios against the shared stream
#[derive(Debug, Clone)]
pub struct PricingProjection {
    pub horizon: u32,
    pub gross: Vec<f64>,
    pub scenarios: [ScenarioProjection; 3],
}

/// Evaluate all three scenarios. Validation is all-or-nothing and happens
/// before any schedule is expanded or revenue aggregated.
pub fn project(config: &PricingConfig) -> Result<PricingProjection, PricingError> {
    config.validate()?;

    let gross = vec![config.gross_revenue; config.horizon as usize];

    let scenarios = [
        evaluate("Scenario #1", &config.scenario_one, &gross, config.horizon)?,
        evaluate("Scenario #2", &config.scenario_two, &gross, config.horizon)?,
        evaluate("Scenario #3", &config.scenario_three, &gross, config.horizon)?,
    ];

    Ok(PricingProjection {
        horizon: config.horizon,
        gross,
        scenarios,
    })
}

fn evaluate(
    name: &str,
    scenario: &ScenarioConfig,
    gross: &[f64],
    horizon: u32,
) -> Result<ScenarioProjection, PricingError> {
    let schedule = scenario.schedule(horizon)?;
    let monthly_rates = schedule.monthly_rates(horizon);
    let revenue = aggregate(gross, &monthly_rates)?;
    Ok(ScenarioProjection {
        name: name.to_string(),
        monthly_rates,
        revenue,
    })
}
