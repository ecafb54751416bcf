//! Project net revenue under three take-rate scenarios
//!
//! Writes the monthly projection table as CSV for the chart layer and
//! prints the 3/6/12/24/36 month summary table to stdout.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use pricing_calculator::report::{format_currency, write_monthly_csv, SummaryTable};
use pricing_calculator::{project, PricingConfig, ScenarioConfig, DEFAULT_HORIZON};

#[derive(Parser, Debug)]
#[command(name = "project_scenarios")]
#[command(about = "Net revenue projection for take-rate pricing scenarios")]
struct Args {
    /// Monthly gross revenue, applied uniformly across the horizon
    #[arg(long, default_value_t = 6000.0)]
    gross_revenue: f64,

    /// Projection horizon in months
    #[arg(long, default_value_t = DEFAULT_HORIZON)]
    horizon: u32,

    /// Static take rate (%) for scenario 1
    #[arg(long, default_value_t = 20.0)]
    static_rate: f64,

    /// Comma-separated stepped take rates (%) for scenario 2
    #[arg(long, default_value = "30,20,15")]
    rates2: String,

    /// Comma-separated period lengths (months) for scenario 2
    #[arg(long, default_value = "3,12")]
    periods2: String,

    /// Comma-separated stepped take rates (%) for scenario 3
    #[arg(long, default_value = "35,25,15")]
    rates3: String,

    /// Comma-separated period lengths (months) for scenario 3
    #[arg(long, default_value = "3,12")]
    periods3: String,

    /// JSON config file; overrides the individual scenario flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path for the monthly projection CSV
    #[arg(long, default_value = "monthly_projection.csv")]
    output: PathBuf,
}

fn build_config(args: &Args) -> Result<PricingConfig> {
    if let Some(path) = &args.config {
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        let config = serde_json::from_reader(file)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        return Ok(config);
    }

    Ok(PricingConfig {
        gross_revenue: args.gross_revenue,
        horizon: args.horizon,
        scenario_one: ScenarioConfig::Static {
            rate: args.static_rate,
        },
        scenario_two: ScenarioConfig::stepped_from_strs(
            &args.rates2,
            &args.periods2,
            "scenario 2 rates",
            "scenario 2 periods",
        )?,
        scenario_three: ScenarioConfig::stepped_from_strs(
            &args.rates3,
            &args.periods3,
            "scenario 3 rates",
            "scenario 3 periods",
        )?,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let args = Args::parse();
    let config = build_config(&args)?;

    info!(
        "projecting {} months at {} monthly gross revenue",
        config.horizon, config.gross_revenue
    );
    let projection = project(&config)?;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create output file {}", args.output.display()))?;
    write_monthly_csv(file, &projection)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("Monthly projection written to {}", args.output.display());

    println!("\n{}", SummaryTable::from_projection(&projection));

    println!("Full horizon totals:");
    for scenario in &projection.scenarios {
        println!(
            "  {}: {}",
            scenario.name,
            format_currency(scenario.revenue.total())
        );
    }

    info!("total time: {:?}", start.elapsed());
    Ok(())
}
