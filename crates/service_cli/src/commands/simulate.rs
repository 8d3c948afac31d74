//! Simulate command implementation
//!
//! Monte Carlo estimates with antithetic pairs, reported next to the
//! closed-form price and a 95% confidence interval.

use clap::Args;
use pricer_core::types::{MarketParams, OptionType};
use pricer_models::analytical::BlackScholes;
use pricer_pricing::mc::{MonteCarloPricer, SimulationResult};
use serde::Serialize;
use tracing::{debug, info};

use super::{selected, MarketArgs};
use crate::config::MonteCarloSection;
use crate::output::{fmt_value, render, OutputFormat, Tabular};
use crate::Result;

/// Arguments for `optpricer simulate`
#[derive(Debug, Clone, Args)]
pub struct SimulateArgs {
    /// Option type (call, put, straddle); all three when omitted
    #[arg(short = 't', long)]
    pub option_type: Option<OptionType>,

    /// Annualised volatility; negative values reflect about intrinsic
    #[arg(long, allow_negative_numbers = true)]
    pub vol: f64,

    #[command(flatten)]
    pub market: MarketArgs,

    /// Number of terminal values to simulate
    #[arg(long)]
    pub paths: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Antithetic pairs per parallel chunk
    #[arg(long)]
    pub chunk_size: Option<usize>,
}

/// Estimate for one option
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRow {
    /// Option type
    pub option_type: OptionType,
    /// Monte Carlo estimate
    #[serde(flatten)]
    pub result: SimulationResult,
    /// Closed-form price for comparison
    pub analytical: f64,
    /// 95% confidence interval
    pub confidence_95: (f64, f64),
}

/// Output of the simulate command
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Inputs used
    pub params: MarketParams,
    /// Seed, when the run was seeded
    pub seed: Option<u64>,
    /// Rows in option type order
    pub rows: Vec<SimulationRow>,
}

impl Tabular for SimulationReport {
    fn headers(&self) -> Vec<&'static str> {
        vec!["Option", "MC Price", "Std Error", "95% Low", "95% High", "Analytical"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let (low, high) = row.confidence_95;
                vec![
                    row.option_type.to_string(),
                    fmt_value(row.result.price),
                    fmt_value(row.result.std_error),
                    fmt_value(low),
                    fmt_value(high),
                    fmt_value(row.analytical),
                ]
            })
            .collect()
    }
}

/// Builds the simulation report.
pub fn report(args: &SimulateArgs, base: &MonteCarloSection) -> Result<SimulationReport> {
    let params = args.market.params(args.vol)?;
    let section = base.merge(args.paths, args.seed, args.chunk_size);
    let config = section.to_config()?;
    debug!("Monte Carlo settings: {:?}", config);

    let model = BlackScholes::new(params)?;
    let pricer = MonteCarloPricer::new(config);

    let rows = selected(args.option_type)
        .into_iter()
        .map(|option_type| -> Result<SimulationRow> {
            let result = pricer.price_european(&params, option_type)?;
            Ok(SimulationRow {
                option_type,
                result,
                analytical: model.price(option_type),
                confidence_95: result.confidence_95(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SimulationReport {
        params,
        seed: section.seed,
        rows,
    })
}

/// Run the simulate command
pub fn run(args: &SimulateArgs, base: &MonteCarloSection, format: OutputFormat) -> Result<String> {
    info!("Running Monte Carlo with σ = {}", args.vol);
    let report = report(args, base)?;
    info!("Simulated {} option(s)", report.rows.len());
    render(&report, format)
}
