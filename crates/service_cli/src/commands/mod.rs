//! CLI command implementations
//!
//! Each command builds a serialisable report and renders it; `main` prints
//! the result.

pub mod greeks;
pub mod implied_vol;
pub mod price;
pub mod simulate;

use clap::Args;
use pricer_core::types::{MarketParams, OptionType, PricingError};

/// Contract and market inputs shared by every command, volatility aside.
#[derive(Debug, Clone, Args)]
pub struct MarketArgs {
    /// Time to expiry in years
    #[arg(long, allow_negative_numbers = true)]
    pub time: f64,

    /// Spot price of the underlying
    #[arg(long, allow_negative_numbers = true)]
    pub spot: f64,

    /// Strike price
    #[arg(long, allow_negative_numbers = true)]
    pub strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Continuously compounded dividend yield
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dividend: f64,
}

impl MarketArgs {
    /// Validated market parameters at volatility `vol`.
    pub fn params(&self, vol: f64) -> Result<MarketParams, PricingError> {
        MarketParams::new(
            vol,
            self.time,
            self.spot,
            self.strike,
            self.rate,
            self.dividend,
        )
    }
}

/// Option types to report on: the one requested, or all of them.
pub(crate) fn selected(option_type: Option<OptionType>) -> Vec<OptionType> {
    match option_type {
        Some(option_type) => vec![option_type],
        None => OptionType::ALL.to_vec(),
    }
}

#[cfg(test)]
pub(crate) fn reference_market() -> MarketArgs {
    MarketArgs {
        time: 1.0,
        spot: 100.0,
        strike: 100.0,
        rate: 0.05,
        dividend: 0.01,
    }
}
