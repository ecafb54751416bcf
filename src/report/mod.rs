//! Tabular output for the charting and summary layers
//!
//! Assembles the per-month table fed to the chart layer and the windowed
//! summary table. The one piece of contract here is the currency rule:
//! totals are rounded to the nearest whole unit BEFORE formatting, so the
//! displayed windowed sums match across consumers.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::scenario::PricingProjection;

/// Format a value as whole-unit currency: rounded first, then thousands
/// separators and a `$` prefix. Negatives render as `-$1,234`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// One row of the monthly projection table
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRevenueRow {
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Gross Revenue")]
    pub gross: f64,
    #[serde(rename = "Scenario 1 Rate (%)")]
    pub rate_1: f64,
    #[serde(rename = "Scenario 2 Rate (%)")]
    pub rate_2: f64,
    #[serde(rename = "Scenario 3 Rate (%)")]
    pub rate_3: f64,
    #[serde(rename = "Scenario 1 Net")]
    pub net_1: f64,
    #[serde(rename = "Scenario 2 Net")]
    pub net_2: f64,
    #[serde(rename = "Scenario 3 Net")]
    pub net_3: f64,
    #[serde(rename = "Scenario 1 Cumulative")]
    pub cumulative_1: f64,
    #[serde(rename = "Scenario 2 Cumulative")]
    pub cumulative_2: f64,
    #[serde(rename = "Scenario 3 Cumulative")]
    pub cumulative_3: f64,
}

/// Flatten a projection into one row per month, months 1..=horizon
pub fn monthly_rows(projection: &PricingProjection) -> Vec<MonthlyRevenueRow> {
    let [s1, s2, s3] = &projection.scenarios;
    (0..projection.horizon as usize)
        .map(|i| MonthlyRevenueRow {
            month: i as u32 + 1,
            gross: projection.gross[i],
            rate_1: s1.monthly_rates[i],
            rate_2: s2.monthly_rates[i],
            rate_3: s3.monthly_rates[i],
            net_1: s1.revenue.per_month[i],
            net_2: s2.revenue.per_month[i],
            net_3: s3.revenue.per_month[i],
            cumulative_1: s1.revenue.cumulative[i],
            cumulative_2: s2.revenue.cumulative[i],
            cumulative_3: s3.revenue.cumulative[i],
        })
        .collect()
}

/// Write the monthly projection table as CSV for the chart layer
pub fn write_monthly_csv<W: Write>(
    writer: W,
    projection: &PricingProjection,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in monthly_rows(projection) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Windowed net revenue summary, one row per lookback boundary
#[derive(Debug, Clone)]
pub struct SummaryTable {
    pub scenario_names: [String; 3],
    /// (window boundary in months, net revenue total per scenario)
    pub rows: Vec<(u32, [f64; 3])>,
}

impl SummaryTable {
    pub fn from_projection(projection: &PricingProjection) -> Self {
        let [s1, s2, s3] = &projection.scenarios;
        let scenario_names = [s1.name.clone(), s2.name.clone(), s3.name.clone()];

        // Windows beyond the horizon were already omitted during
        // aggregation, and all scenarios share the same window set
        let rows = s1
            .revenue
            .windowed_sums
            .iter()
            .enumerate()
            .map(|(i, &(boundary, sum_1))| {
                let (_, sum_2) = s2.revenue.windowed_sums[i];
                let (_, sum_3) = s3.revenue.windowed_sums[i];
                (boundary, [sum_1, sum_2, sum_3])
            })
            .collect();

        Self {
            scenario_names,
            rows,
        }
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:>14} {:>14} {:>14}",
            "Net Revenue",
            self.scenario_names[0],
            self.scenario_names[1],
            self.scenario_names[2]
        )?;
        for (boundary, sums) in &self.rows {
            writeln!(
                f,
                "{:<12} {:>14} {:>14} {:>14}",
                format!("{boundary} Months"),
                format_currency(sums[0]),
                format_currency(sums[1]),
                format_currency(sums[2]),
            )?;
        }
        Ok(())
    }
}
