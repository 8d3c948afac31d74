//! Price command implementation
//!
//! Closed-form Black-Scholes prices alongside the discounted intrinsic value.

use clap::Args;
use pricer_core::types::{MarketParams, OptionType};
use pricer_models::analytical::BlackScholes;
use serde::Serialize;
use tracing::info;

use super::{selected, MarketArgs};
use crate::output::{fmt_value, render, OutputFormat, Tabular};
use crate::Result;

/// Arguments for `optpricer price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Option type (call, put, straddle); all three when omitted
    #[arg(short = 't', long)]
    pub option_type: Option<OptionType>,

    /// Annualised volatility; negative values reflect about intrinsic
    #[arg(long, allow_negative_numbers = true)]
    pub vol: f64,

    #[command(flatten)]
    pub market: MarketArgs,
}

/// One priced option
#[derive(Debug, Clone, Serialize)]
pub struct PriceQuote {
    /// Option type
    pub option_type: OptionType,
    /// Black-Scholes value
    pub price: f64,
    /// Discounted intrinsic value
    pub intrinsic: f64,
}

/// Output of the price command
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Inputs used
    pub params: MarketParams,
    /// Quotes in option type order
    pub quotes: Vec<PriceQuote>,
}

impl Tabular for PriceReport {
    fn headers(&self) -> Vec<&'static str> {
        vec!["Option", "Price", "Intrinsic"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.quotes
            .iter()
            .map(|q| {
                vec![
                    q.option_type.to_string(),
                    fmt_value(q.price),
                    fmt_value(q.intrinsic),
                ]
            })
            .collect()
    }
}

/// Builds the price report.
pub fn report(args: &PriceArgs) -> Result<PriceReport> {
    let params = args.market.params(args.vol)?;
    let model = BlackScholes::new(params)?;

    let quotes = selected(args.option_type)
        .into_iter()
        .map(|option_type| PriceQuote {
            option_type,
            price: model.price(option_type),
            intrinsic: params.intrinsic(option_type),
        })
        .collect();

    Ok(PriceReport { params, quotes })
}

/// Run the price command
pub fn run(args: &PriceArgs, format: OutputFormat) -> Result<String> {
    info!("Pricing with σ = {}, τ = {}", args.vol, args.market.time);
    let report = report(args)?;
    info!("Priced {} option(s)", report.quotes.len());
    render(&report, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::reference_market;
    use crate::CliError;
    use approx::assert_relative_eq;
    use pricer_core::types::PricingError;

    fn args(option_type: Option<OptionType>) -> PriceArgs {
        PriceArgs {
            option_type,
            vol: 0.2,
            market: reference_market(),
        }
    }

    #[test]
    fn test_reference_prices() {
        let report = report(&args(None)).unwrap();
        assert_eq!(report.quotes.len(), 3);
        assert_relative_eq!(report.quotes[0].price, 9.826297782739111, epsilon = 1e-9);
        assert_relative_eq!(report.quotes[1].price, 5.944256857893713, epsilon = 1e-9);
        assert_relative_eq!(report.quotes[2].price, 15.770554640632824, epsilon = 1e-9);
    }

    #[test]
    fn test_single_option_type() {
        let report = report(&args(Some(OptionType::Put))).unwrap();
        assert_eq!(report.quotes.len(), 1);
        assert_eq!(report.quotes[0].option_type, OptionType::Put);
    }

    #[test]
    fn test_invalid_market_is_error() {
        let mut bad = args(None);
        bad.market.time = -1.0;
        let err = run(&bad, OutputFormat::Table).unwrap_err();
        assert!(matches!(
            err,
            CliError::Pricing(PricingError::NegativeTimeToExpiry { .. })
        ));
    }

    #[test]
    fn test_table_lists_each_option() {
        let table = run(&args(None), OutputFormat::Table).unwrap();
        assert!(table.contains("call"));
        assert!(table.contains("put"));
        assert!(table.contains("straddle"));
        assert!(table.contains("9.8262977827"));
    }

    #[test]
    fn test_json_output() {
        let json = run(&args(Some(OptionType::Call)), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["quotes"][0]["option_type"], "call");
        assert_eq!(value["params"]["spot"], 100.0);
    }
}
