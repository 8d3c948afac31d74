//! Black-Scholes market parameters.

use super::error::PricingError;
use super::option_type::OptionType;
use super::validation::{check_finite, check_price_params};

/// The six market inputs of the Black-Scholes model.
///
/// Volatility may be negative: the pricing engine treats `σ < 0` as a
/// reflection of the `|σ|` result about the intrinsic value. Rate and
/// dividend yield are unconstrained. Time to expiry, spot and strike must
/// be non-negative.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, OptionType};
///
/// let params = MarketParams::new(0.2, 1.0, 100.0, 90.0, 0.0, 0.0).unwrap();
/// assert_eq!(params.intrinsic(OptionType::Call), 10.0);
/// assert_eq!(params.intrinsic(OptionType::Put), 0.0);
///
/// assert!(MarketParams::new(0.2, 1.0, -100.0, 90.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Volatility (σ), annualised
    pub volatility: f64,
    /// Time to expiry in years (τ)
    pub time_to_expiry: f64,
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike (K)
    pub strike: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Continuously compounded dividend yield (q)
    pub dividend_yield: f64,
}

impl MarketParams {
    /// Creates validated market parameters.
    ///
    /// # Errors
    /// See [`MarketParams::validate`].
    pub fn new(
        volatility: f64,
        time_to_expiry: f64,
        spot: f64,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
    ) -> Result<Self, PricingError> {
        let params = Self {
            volatility,
            time_to_expiry,
            spot,
            strike,
            rate,
            dividend_yield,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameters.
    ///
    /// # Errors
    /// - `NonFiniteInput` if any input is NaN or infinite
    /// - `NegativeTimeToExpiry`, `NegativeSpot`, `NegativeStrike` for the
    ///   respective negative input
    pub fn validate(&self) -> Result<(), PricingError> {
        check_price_params(self.time_to_expiry, self.spot, self.strike)?;
        check_finite("volatility", self.volatility)?;
        check_finite("rate", self.rate)?;
        check_finite("dividend_yield", self.dividend_yield)?;
        Ok(())
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Returns a copy with a different time to expiry.
    #[inline]
    pub fn with_time_to_expiry(self, time_to_expiry: f64) -> Self {
        Self {
            time_to_expiry,
            ..self
        }
    }

    /// Returns a copy with a different spot.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Dividend discount factor `e^(-qτ)`.
    #[inline]
    pub fn dividend_discount(&self) -> f64 {
        (-self.dividend_yield * self.time_to_expiry).exp()
    }

    /// Rate discount factor `e^(-rτ)`.
    #[inline]
    pub fn rate_discount(&self) -> f64 {
        (-self.rate * self.time_to_expiry).exp()
    }

    /// Discounted spot `S' = S·e^(-qτ)`.
    #[inline]
    pub fn discounted_spot(&self) -> f64 {
        self.spot * self.dividend_discount()
    }

    /// Discounted strike `K' = K·e^(-rτ)`.
    #[inline]
    pub fn discounted_strike(&self) -> f64 {
        self.strike * self.rate_discount()
    }

    /// Forward value `S·e^(-qτ) - K·e^(-rτ)`.
    #[inline]
    pub fn forward_value(&self) -> f64 {
        self.discounted_spot() - self.discounted_strike()
    }

    /// Discounted intrinsic value; the zero-volatility price.
    #[inline]
    pub fn intrinsic(&self, option_type: OptionType) -> f64 {
        option_type.payoff(self.forward_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_validates() {
        assert!(MarketParams::new(0.2, 1.0, 100.0, 100.0, 0.05, 0.01).is_ok());
        assert!(MarketParams::new(-0.2, 1.0, 100.0, 100.0, -0.05, -0.01).is_ok());
        assert_eq!(
            MarketParams::new(0.2, -1.0, 100.0, 100.0, 0.0, 0.0),
            Err(PricingError::NegativeTimeToExpiry {
                time_to_expiry: -1.0
            })
        );
        assert_eq!(
            MarketParams::new(0.2, 1.0, 100.0, -100.0, 0.0, 0.0),
            Err(PricingError::NegativeStrike { strike: -100.0 })
        );
        assert!(matches!(
            MarketParams::new(f64::NAN, 1.0, 100.0, 100.0, 0.0, 0.0),
            Err(PricingError::NonFiniteInput {
                name: "volatility",
                ..
            })
        ));
    }

    #[test]
    fn test_infinite_inputs_rejected() {
        assert!(matches!(
            MarketParams::new(0.2, f64::INFINITY, 100.0, 100.0, 0.05, 0.0),
            Err(PricingError::NonFiniteInput {
                name: "time_to_expiry",
                ..
            })
        ));
        assert!(matches!(
            MarketParams::new(0.2, 1.0, f64::INFINITY, 100.0, 0.05, 0.0),
            Err(PricingError::NonFiniteInput { name: "spot", .. })
        ));
        assert!(matches!(
            MarketParams::new(0.2, 1.0, 100.0, 100.0, f64::NEG_INFINITY, 0.0),
            Err(PricingError::NonFiniteInput { name: "rate", .. })
        ));
    }

    #[test]
    fn test_forward_value() {
        let params = MarketParams::new(0.2, 2.0, 100.0, 110.0, 0.05, 0.02).unwrap();
        let expected = 100.0 * (-0.04_f64).exp() - 110.0 * (-0.1_f64).exp();
        assert_relative_eq!(params.forward_value(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_intrinsic_by_type() {
        let params = MarketParams::new(0.0, 1.0, 80.0, 100.0, 0.0, 0.0).unwrap();
        assert_eq!(params.intrinsic(OptionType::Call), 0.0);
        assert_eq!(params.intrinsic(OptionType::Put), 20.0);
        assert_eq!(params.intrinsic(OptionType::Straddle), 20.0);
    }

    #[test]
    fn test_zero_time_intrinsic_is_payoff() {
        let params = MarketParams::new(0.3, 0.0, 120.0, 100.0, 0.1, 0.2).unwrap();
        assert_eq!(params.intrinsic(OptionType::Call), 20.0);
    }

    #[test]
    fn test_with_builders_keep_other_fields() {
        let params = MarketParams::new(0.2, 1.0, 100.0, 100.0, 0.05, 0.01).unwrap();
        let bumped = params.with_spot(101.0).with_volatility(0.3);
        assert_eq!(bumped.spot, 101.0);
        assert_eq!(bumped.volatility, 0.3);
        assert_eq!(bumped.strike, params.strike);
        assert_eq!(bumped.with_time_to_expiry(0.5).time_to_expiry, 0.5);
    }
}
