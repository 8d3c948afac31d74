//! Implied volatility command implementation

use clap::Args;
use pricer_core::types::{MarketParams, OptionType};
use pricer_models::analytical::{implied_vol, BlackScholes, ImpliedVolConfig};
use serde::Serialize;
use tracing::{debug, info};

use super::MarketArgs;
use crate::output::{fmt_value, render, OutputFormat, Tabular};
use crate::Result;

/// Arguments for `optpricer implied-vol`
#[derive(Debug, Clone, Args)]
pub struct ImpliedVolArgs {
    /// Option type (call, put, straddle)
    #[arg(short = 't', long)]
    pub option_type: OptionType,

    /// Observed option premium
    #[arg(long, allow_negative_numbers = true)]
    pub premium: f64,

    #[command(flatten)]
    pub market: MarketArgs,

    /// Initial lower volatility bound
    #[arg(long, allow_negative_numbers = true)]
    pub lower_bound: Option<f64>,

    /// Initial upper volatility bound
    #[arg(long, allow_negative_numbers = true)]
    pub upper_bound: Option<f64>,

    /// Convergence tolerance on the bracket width
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Cap on expansion and bisection steps
    #[arg(long)]
    pub max_iterations: Option<usize>,
}

impl ImpliedVolArgs {
    /// Overlays the command-line search settings onto `base`.
    pub fn search_config(&self, base: &ImpliedVolConfig) -> ImpliedVolConfig {
        let mut config = *base;
        if let Some(lower_bound) = self.lower_bound {
            config = config.with_lower_bound(lower_bound);
        }
        if let Some(upper_bound) = self.upper_bound {
            config = config.with_upper_bound(upper_bound);
        }
        if let Some(tolerance) = self.tolerance {
            config = config.with_tolerance(tolerance);
        }
        if let Some(max_iterations) = self.max_iterations {
            config = config.with_max_iterations(max_iterations);
        }
        config
    }
}

/// Output of the implied-vol command
#[derive(Debug, Clone, Serialize)]
pub struct ImpliedVolReport {
    /// Option type
    pub option_type: OptionType,
    /// Premium inverted
    pub premium: f64,
    /// Market inputs; `volatility` holds the solution
    pub params: MarketParams,
    /// Solved volatility
    pub implied_vol: f64,
    /// Price at the solved volatility
    pub repriced: f64,
    /// Search settings used
    pub config: ImpliedVolConfig,
}

impl Tabular for ImpliedVolReport {
    fn headers(&self) -> Vec<&'static str> {
        vec!["Option", "Premium", "Implied Vol", "Repriced"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.option_type.to_string(),
            fmt_value(self.premium),
            fmt_value(self.implied_vol),
            fmt_value(self.repriced),
        ]]
    }
}

/// Builds the implied volatility report.
pub fn report(args: &ImpliedVolArgs, base: &ImpliedVolConfig) -> Result<ImpliedVolReport> {
    let config = args.search_config(base);
    debug!("Implied vol search: {:?}", config);

    let market = args.market.params(0.0)?;
    let vol = implied_vol(args.premium, &market, args.option_type, &config)?;
    let params = market.with_volatility(vol);
    let repriced = BlackScholes::new(params)?.price(args.option_type);

    Ok(ImpliedVolReport {
        option_type: args.option_type,
        premium: args.premium,
        params,
        implied_vol: vol,
        repriced,
        config,
    })
}

/// Run the implied-vol command
pub fn run(args: &ImpliedVolArgs, base: &ImpliedVolConfig, format: OutputFormat) -> Result<String> {
    info!(
        "Solving implied vol for {} premium {}",
        args.option_type, args.premium
    );
    let report = report(args, base)?;
    info!("Implied vol: {}", report.implied_vol);
    render(&report, format)
}
