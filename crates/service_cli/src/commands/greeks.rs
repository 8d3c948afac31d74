//! Greeks command implementation
//!
//! Analytic sensitivities by default; `--numerical` swaps in central
//! finite differences of the closed-form price.

use clap::Args;
use pricer_core::types::{MarketParams, OptionType};
use pricer_models::analytical::{BlackScholes, FiniteDifferenceGreeks, Greeks};
use serde::Serialize;
use tracing::{debug, info};

use super::{selected, MarketArgs};
use crate::output::{fmt_value, render, OutputFormat, Tabular};
use crate::Result;

/// Arguments for `optpricer greeks`
#[derive(Debug, Clone, Args)]
pub struct GreeksArgs {
    /// Option type (call, put, straddle); all three when omitted
    #[arg(short = 't', long)]
    pub option_type: Option<OptionType>,

    /// Annualised volatility; negative values reflect about intrinsic
    #[arg(long, allow_negative_numbers = true)]
    pub vol: f64,

    #[command(flatten)]
    pub market: MarketArgs,

    /// Use finite differences instead of the analytic formulas
    #[arg(long)]
    pub numerical: bool,

    /// Bump size for every finite difference (implies --numerical)
    #[arg(long)]
    pub bump: Option<f64>,
}

/// How the sensitivities were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GreeksMethod {
    /// Closed-form derivatives
    Analytical,
    /// Bumped closed-form prices
    FiniteDifference,
}

/// Greeks of one option
#[derive(Debug, Clone, Serialize)]
pub struct GreeksRow {
    /// Option type
    pub option_type: OptionType,
    /// Price and sensitivities
    #[serde(flatten)]
    pub greeks: Greeks,
}

/// Output of the greeks command
#[derive(Debug, Clone, Serialize)]
pub struct GreeksReport {
    /// Inputs used
    pub params: MarketParams,
    /// Analytic or finite difference
    pub method: GreeksMethod,
    /// Rows in option type order
    pub rows: Vec<GreeksRow>,
}

impl Tabular for GreeksReport {
    fn headers(&self) -> Vec<&'static str> {
        vec!["Option", "Price", "Delta", "Gamma", "Theta", "Vega"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let g = &row.greeks;
                vec![
                    row.option_type.to_string(),
                    fmt_value(g.price),
                    fmt_value(g.delta),
                    fmt_value(g.gamma),
                    fmt_value(g.theta),
                    fmt_value(g.vega),
                ]
            })
            .collect()
    }
}

/// Builds the greeks report.
pub fn report(args: &GreeksArgs) -> Result<GreeksReport> {
    let params = args.market.params(args.vol)?;
    let model = BlackScholes::new(params)?;

    let numerical = match args.bump {
        Some(bump) => Some(FiniteDifferenceGreeks::uniform(bump)?),
        None if args.numerical => Some(FiniteDifferenceGreeks::default()),
        None => None,
    };

    let method = if numerical.is_some() {
        GreeksMethod::FiniteDifference
    } else {
        GreeksMethod::Analytical
    };
    debug!("Greeks method: {:?}", method);

    let rows = selected(args.option_type)
        .into_iter()
        .map(|option_type| -> Result<GreeksRow> {
            let greeks = match &numerical {
                None => model.greeks(option_type),
                Some(fd) => Greeks {
                    price: model.price(option_type),
                    delta: fd.delta(&params, option_type)?,
                    gamma: fd.gamma(&params, option_type)?,
                    theta: fd.theta(&params, option_type)?,
                    vega: fd.vega(&params, option_type)?,
                },
            };
            Ok(GreeksRow {
                option_type,
                greeks,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GreeksReport {
        params,
        method,
        rows,
    })
}

/// Run the greeks command
pub fn run(args: &GreeksArgs, format: OutputFormat) -> Result<String> {
    info!("Computing Greeks with σ = {}", args.vol);
    let report = report(args)?;
    render(&report, format)
}
