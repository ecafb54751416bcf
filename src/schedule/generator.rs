//! Rate schedule value object and per-month expansion
//!
//! A schedule is an ordered list of (rate, period length) steps. Expansion
//! maps each month index 1..=horizon onto the rate of the first step whose
//! cumulative boundary covers it. Months beyond the last declared boundary
//! extend the last declared rate; this was an implicit fallthrough in the
//! reference logic and is an explicit contract here.

use crate::error::PricingError;

/// One contiguous run of months at a single take rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateStep {
    /// Take rate as a percentage in [0, 100]
    pub rate: f64,
    /// Number of months this rate applies
    pub months: u32,
}

/// Immutable take-rate schedule, rebuilt from input on every recomputation
#[derive(Debug, Clone, PartialEq)]
pub struct RateSchedule {
    steps: Vec<RateStep>,
}

impl RateSchedule {
    /// Build a single-step schedule applying one rate for the whole horizon
    pub fn flat(rate: f64) -> Result<Self, PricingError> {
        validate_rate(rate)?;
        Ok(Self {
            steps: vec![RateStep { rate, months: u32::MAX }],
        })
    }

    /// Build a stepped schedule from declared rates and period lengths.
    ///
    /// If the declared periods leave a remainder before `horizon`, an
    /// implicit trailing period is appended covering it; a zero or negative
    /// remainder (periods summing to or past the horizon) appends nothing.
    /// The trailing period reuses the last rate when `rates` has one entry
    /// fewer than the final period list; any other length mismatch is a
    /// `ConfigurationError`.
    pub fn stepped(rates: &[f64], periods: &[u32], horizon: u32) -> Result<Self, PricingError> {
        if rates.is_empty() {
            return Err(PricingError::ConfigurationError(
                "at least one take rate is required".to_string(),
            ));
        }
        for &rate in rates {
            validate_rate(rate)?;
        }
        if periods.iter().any(|&p| p == 0) {
            return Err(PricingError::ConfigurationError(
                "period lengths must be positive".to_string(),
            ));
        }

        let declared: u64 = periods.iter().map(|&p| p as u64).sum();
        let remainder = (horizon as i64) - (declared as i64);

        let mut full_periods = periods.to_vec();
        if remainder > 0 {
            full_periods.push(remainder as u32);
        }

        let steps = if rates.len() == full_periods.len() {
            rates
                .iter()
                .zip(&full_periods)
                .map(|(&rate, &months)| RateStep { rate, months })
                .collect()
        } else if rates.len() + 1 == full_periods.len() {
            // Trailing period has no declared rate; reuse the last one
            let last_rate = rates[rates.len() - 1];
            rates
                .iter()
                .chain(std::iter::once(&last_rate))
                .zip(&full_periods)
                .map(|(&rate, &months)| RateStep { rate, months })
                .collect()
        } else {
            return Err(PricingError::ConfigurationError(format!(
                "{} rates cannot be matched to {} periods",
                rates.len(),
                full_periods.len()
            )));
        };

        Ok(Self { steps })
    }

    /// Schedule steps in order
    pub fn steps(&self) -> &[RateStep] {
        &self.steps
    }

    /// Expand the schedule into one rate per month, length == `horizon`.
    ///
    /// Each month m in 1..=horizon takes the rate of the first step whose
    /// cumulative boundary is >= m. Months past the last boundary extend
    /// the last rate. Steps whose boundary overruns the horizon only affect
    /// months <= horizon; earlier assignments are never disturbed.
    pub fn monthly_rates(&self, horizon: u32) -> Vec<f64> {
        let boundaries: Vec<u64> = self
            .steps
            .iter()
            .scan(0u64, |acc, step| {
                *acc += step.months as u64;
                Some(*acc)
            })
            .collect();

        let last_rate = self.steps[self.steps.len() - 1].rate;
        (1..=horizon as u64)
            .map(|month| {
                boundaries
                    .iter()
                    .position(|&boundary| month <= boundary)
                    .map(|idx| self.steps[idx].rate)
                    .unwrap_or(last_rate)
            })
            .collect()
    }
}

fn validate_rate(rate: f64) -> Result<(), PricingError> {
    if !(0.0..=100.0).contains(&rate) {
        return Err(PricingError::InvalidInput(format!(
            "take rate {rate} is outside [0, 100]"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_exact_horizon() {
        // periods sum to exactly 36, no remainder appended
        let schedule = RateSchedule::stepped(&[30.0, 20.0, 15.0], &[3, 12, 21], 36).unwrap();
        let rates = schedule.monthly_rates(36);

        assert_eq!(rates.len(), 36);
        assert!(rates[..3].iter().all(|&r| r == 30.0));
        assert!(rates[3..15].iter().all(|&r| r == 20.0));
        assert!(rates[15..].iter().all(|&r| r == 15.0));
    }

    #[test]
    fn test_remainder_period_appended() {
        // 3 + 12 = 15, remainder 21 appended for the third rate
        let schedule = RateSchedule::stepped(&[35.0, 25.0, 15.0], &[3, 12], 36).unwrap();
        let rates = schedule.monthly_rates(36);

        assert_eq!(rates.len(), 36);
        assert_eq!(rates[0], 35.0);
        assert_eq!(rates[2], 35.0);
        assert_eq!(rates[3], 25.0);
        assert_eq!(rates[14], 25.0);
        assert_eq!(rates[15], 15.0);
        assert_eq!(rates[35], 15.0);
    }

    #[test]
    fn test_trailing_rate_reused_when_rates_run_short() {
        // Two rates, remainder period makes three periods; last rate extends
        let schedule = RateSchedule::stepped(&[30.0, 20.0], &[3, 12], 36).unwrap();
        let rates = schedule.monthly_rates(36);

        assert_eq!(rates[2], 30.0);
        assert_eq!(rates[3], 20.0);
        assert_eq!(rates[35], 20.0);
    }

    #[test]
    fn test_periods_overrun_horizon() {
        // 3 + 48 > 36: no remainder, trailing overrun must not corrupt
        // the first step's assignments
        let schedule = RateSchedule::stepped(&[30.0, 20.0], &[3, 48], 36).unwrap();
        let rates = schedule.monthly_rates(36);

        assert_eq!(rates.len(), 36);
        assert!(rates[..3].iter().all(|&r| r == 30.0));
        assert!(rates[3..].iter().all(|&r| r == 20.0));
    }

    #[test]
    fn test_months_beyond_all_boundaries_extend_last_rate() {
        // Declared periods cover only 21 of 36 months; the remainder
        // period reuses the last declared rate for months 22..36
        let schedule = RateSchedule::stepped(&[30.0, 20.0, 15.0], &[3, 12, 6], 36).unwrap();
        let rates = schedule.monthly_rates(36);

        assert_eq!(rates.len(), 36);
        assert_eq!(rates[20], 15.0);
        assert_eq!(rates[35], 15.0);
    }

    #[test]
    fn test_flat_schedule() {
        let schedule = RateSchedule::flat(20.0).unwrap();
        let rates = schedule.monthly_rates(36);

        assert_eq!(rates.len(), 36);
        assert!(rates.iter().all(|&r| r == 20.0));
    }

    #[test]
    fn test_expansion_is_pure() {
        let schedule = RateSchedule::stepped(&[30.0, 20.0, 15.0], &[3, 12], 36).unwrap();
        assert_eq!(schedule.monthly_rates(36), schedule.monthly_rates(36));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        // 3 rates against 2 periods that already cover the horizon: the
        // remainder append never fires and the lengths cannot be matched
        let err = RateSchedule::stepped(&[30.0, 20.0, 15.0], &[12, 24], 36).unwrap_err();
        assert!(matches!(err, PricingError::ConfigurationError(_)));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = RateSchedule::stepped(&[30.0, -5.0], &[3, 33], 36).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));

        assert!(RateSchedule::flat(-1.0).is_err());
        assert!(RateSchedule::flat(101.0).is_err());
    }

    #[test]
    fn test_zero_period_rejected() {
        let err = RateSchedule::stepped(&[30.0, 20.0], &[0, 36], 36).unwrap_err();
        assert!(matches!(err, PricingError::ConfigurationError(_)));
    }

    #[test]
    fn test_empty_rates_rejected() {
        assert!(RateSchedule::stepped(&[], &[3, 12], 36).is_err());
    }
}
