//! Revenue aggregation over a monthly rate sequence
//!
//! Given the gross revenue stream and one take rate per month, computes
//! per-month net revenue, the running cumulative total, and summed net
//! revenue over the fixed summary lookback windows.

use crate::error::PricingError;

/// Fixed lookback boundaries for the summary table, in months
pub const SUMMARY_WINDOWS: [u32; 5] = [3, 6, 12, 24, 36];

/// Derived net revenue series for one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueProjection {
    /// Net revenue per month: gross * rate / 100
    pub per_month: Vec<f64>,
    /// Running total of per-month net revenue, same length
    pub cumulative: Vec<f64>,
    /// (window boundary, summed net revenue over months 1..=boundary),
    /// one entry per summary window that fits within the horizon
    pub windowed_sums: Vec<(u32, f64)>,
}

/// Aggregate a gross revenue stream against a per-month rate sequence.
///
/// Fails with `DimensionMismatch` when the two sequences differ in length
/// and with `InvalidInput` on a negative gross value (rates are range
/// checked at schedule construction). Summary windows beyond the horizon
/// are omitted rather than clamped.
pub fn aggregate(gross: &[f64], monthly_rates: &[f64]) -> Result<RevenueProjection, PricingError> {
    if gross.len() != monthly_rates.len() {
        return Err(PricingError::DimensionMismatch {
            gross: gross.len(),
            rates: monthly_rates.len(),
        });
    }
    if let Some(bad) = gross.iter().find(|&&g| g < 0.0) {
        return Err(PricingError::InvalidInput(format!(
            "gross revenue {bad} is negative"
        )));
    }

    let per_month: Vec<f64> = gross
        .iter()
        .zip(monthly_rates)
        .map(|(&g, &rate)| g * rate / 100.0)
        .collect();

    let cumulative: Vec<f64> = per_month
        .iter()
        .scan(0.0, |acc, &net| {
            *acc += net;
            Some(*acc)
        })
        .collect();

    let windowed_sums = SUMMARY_WINDOWS
        .iter()
        .filter(|&&boundary| boundary as usize <= per_month.len())
        .map(|&boundary| (boundary, per_month[..boundary as usize].iter().sum()))
        .collect();

    Ok(RevenueProjection {
        per_month,
        cumulative,
        windowed_sums,
    })
}

impl RevenueProjection {
    /// Total net revenue over the full horizon
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_rate_aggregation() {
        // 6000 gross at a flat 20% nets 1200 every month
        let gross = vec![6000.0; 36];
        let rates = vec![20.0; 36];
        let proj = aggregate(&gross, &rates).unwrap();

        assert_eq!(proj.per_month.len(), 36);
        assert!(proj.per_month.iter().all(|&net| net == 1200.0));
        assert_relative_eq!(proj.cumulative[2], 3600.0);
        assert_eq!(proj.windowed_sums[0], (3, 3600.0));
        assert_relative_eq!(proj.total(), 1200.0 * 36.0);
    }

    #[test]
    fn test_stepped_windowed_sums() {
        // 35% for 3 months, 25% for 12, 15% for the rest of 36
        let gross = vec![6000.0; 36];
        let mut rates = vec![35.0; 3];
        rates.extend(vec![25.0; 12]);
        rates.extend(vec![15.0; 21]);
        let proj = aggregate(&gross, &rates).unwrap();

        // 3 months at 2100 plus 9 months at 1500
        let twelve = proj
            .windowed_sums
            .iter()
            .find(|&&(b, _)| b == 12)
            .map(|&(_, sum)| sum)
            .unwrap();
        assert_relative_eq!(twelve, 19_800.0);
    }

    #[test]
    fn test_cumulative_matches_per_month_sum() {
        let gross = vec![6000.0; 36];
        let rates: Vec<f64> = (0..36).map(|m| 10.0 + (m % 7) as f64).collect();
        let proj = aggregate(&gross, &rates).unwrap();

        let total: f64 = proj.per_month.iter().sum();
        assert_relative_eq!(proj.total(), total, epsilon = 1e-9);

        for (boundary, sum) in &proj.windowed_sums {
            let expected: f64 = proj.per_month[..*boundary as usize].iter().sum();
            assert_relative_eq!(*sum, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_windows_beyond_horizon_omitted() {
        let gross = vec![6000.0; 12];
        let rates = vec![20.0; 12];
        let proj = aggregate(&gross, &rates).unwrap();

        let boundaries: Vec<u32> = proj.windowed_sums.iter().map(|&(b, _)| b).collect();
        assert_eq!(boundaries, vec![3, 6, 12]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = aggregate(&[6000.0; 36], &[20.0; 35]).unwrap_err();
        assert!(matches!(
            err,
            PricingError::DimensionMismatch { gross: 36, rates: 35 }
        ));
    }

    #[test]
    fn test_negative_gross_rejected() {
        let err = aggregate(&[6000.0, -1.0], &[20.0, 20.0]).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }
}
