//! Finite-difference Greeks.
//!
//! Re-prices the analytic model with bumped inputs. Central differences are
//! used in the interior; near the `S = 0` and `τ = 0` boundaries a
//! one-sided second-order stencil keeps every bumped input valid.

use pricer_core::types::validation::check_epsilon;
use pricer_core::types::{MarketParams, OptionType, PricingError};

use super::black_scholes::BlackScholes;

/// Default bump for spot and volatility.
pub const DEFAULT_BUMP: f64 = 1e-4;

/// Default bump for time to expiry.
pub const DEFAULT_TIME_BUMP: f64 = 1e-5;

/// Numerical Delta, Gamma, Vega and Theta.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, OptionType};
/// use pricer_models::analytical::{BlackScholes, FiniteDifferenceGreeks};
///
/// let params = MarketParams::new(0.2, 1.0, 100.0, 100.0, 0.05, 0.01).unwrap();
/// let fd = FiniteDifferenceGreeks::default();
///
/// let numeric = fd.delta(&params, OptionType::Call).unwrap();
/// let analytic = BlackScholes::new(params).unwrap().delta(OptionType::Call);
/// assert!((numeric - analytic).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDifferenceGreeks {
    spot_bump: f64,
    vol_bump: f64,
    time_bump: f64,
}

impl Default for FiniteDifferenceGreeks {
    fn default() -> Self {
        Self {
            spot_bump: DEFAULT_BUMP,
            vol_bump: DEFAULT_BUMP,
            time_bump: DEFAULT_TIME_BUMP,
        }
    }
}

impl FiniteDifferenceGreeks {
    /// Creates a calculator with explicit bump sizes.
    ///
    /// # Errors
    /// `PricingError::InvalidEpsilon` if any bump is not positive and finite.
    pub fn new(spot_bump: f64, vol_bump: f64, time_bump: f64) -> Result<Self, PricingError> {
        check_epsilon(spot_bump)?;
        check_epsilon(vol_bump)?;
        check_epsilon(time_bump)?;
        Ok(Self {
            spot_bump,
            vol_bump,
            time_bump,
        })
    }

    /// Same bump for every input.
    pub fn uniform(epsilon: f64) -> Result<Self, PricingError> {
        Self::new(epsilon, epsilon, epsilon)
    }

    /// ∂V/∂S.
    pub fn delta(&self, params: &MarketParams, option_type: OptionType) -> Result<f64, PricingError> {
        let h = self.spot_bump;
        let s = params.spot;
        let at = |spot: f64| price(params.with_spot(spot), option_type);

        if s < h {
            Ok(forward_first(at(s)?, at(s + h)?, at(s + 2.0 * h)?, h))
        } else {
            Ok((at(s + h)? - at(s - h)?) / (2.0 * h))
        }
    }

    /// ∂²V/∂S².
    pub fn gamma(&self, params: &MarketParams, option_type: OptionType) -> Result<f64, PricingError> {
        let h = self.spot_bump;
        let s = params.spot;
        let at = |spot: f64| price(params.with_spot(spot), option_type);

        if s < h {
            Ok((at(s)? - 2.0 * at(s + h)? + at(s + 2.0 * h)?) / (h * h))
        } else {
            Ok((at(s + h)? - 2.0 * at(s)? + at(s - h)?) / (h * h))
        }
    }

    /// ∂V/∂|σ|, signed to match the analytic negative-volatility convention.
    pub fn vega(&self, params: &MarketParams, option_type: OptionType) -> Result<f64, PricingError> {
        let h = self.vol_bump;
        let sign = if params.volatility < 0.0 { -1.0 } else { 1.0 };
        let a = params.volatility.abs();
        let at = |magnitude: f64| price(params.with_volatility(sign * magnitude), option_type);

        if a < h {
            Ok(forward_first(at(a)?, at(a + h)?, at(a + 2.0 * h)?, h))
        } else {
            Ok((at(a + h)? - at(a - h)?) / (2.0 * h))
        }
    }

    /// -∂V/∂τ.
    pub fn theta(&self, params: &MarketParams, option_type: OptionType) -> Result<f64, PricingError> {
        let h = self.time_bump;
        let t = params.time_to_expiry;
        let at = |tau: f64| price(params.with_time_to_expiry(tau), option_type);

        if t < h {
            Ok(-forward_first(at(t)?, at(t + h)?, at(t + 2.0 * h)?, h))
        } else {
            Ok(-(at(t + h)? - at(t - h)?) / (2.0 * h))
        }
    }
}

/// Second-order forward difference on `[x, x+h, x+2h]`.
#[inline]
fn forward_first(f0: f64, f1: f64, f2: f64, h: f64) -> f64 {
    (-3.0 * f0 + 4.0 * f1 - f2) / (2.0 * h)
}

#[inline]
fn price(params: MarketParams, option_type: OptionType) -> Result<f64, PricingError> {
    Ok(BlackScholes::new(params)?.price(option_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(vol: f64, t: f64, s: f64, k: f64) -> MarketParams {
        MarketParams::new(vol, t, s, k, 0.05, 0.01).unwrap()
    }

    #[test]
    fn test_invalid_epsilon() {
        assert_eq!(
            FiniteDifferenceGreeks::uniform(0.0),
            Err(PricingError::InvalidEpsilon(0.0))
        );
        assert!(FiniteDifferenceGreeks::new(1e-4, -1e-4, 1e-5).is_err());
        assert!(FiniteDifferenceGreeks::new(1e-4, 1e-4, f64::INFINITY).is_err());
    }

    #[test]
    fn test_matches_analytic_in_the_interior() {
        let fd = FiniteDifferenceGreeks::default();
        for strike in [90.0, 100.0, 110.0] {
            let p = params(0.25, 1.0, 100.0, strike);
            let bs = BlackScholes::new(p).unwrap();
            for option_type in OptionType::ALL {
                assert_relative_eq!(
                    fd.delta(&p, option_type).unwrap(),
                    bs.delta(option_type),
                    epsilon = 1e-6
                );
                assert_relative_eq!(
                    fd.gamma(&p, option_type).unwrap(),
                    bs.gamma(option_type),
                    epsilon = 1e-4
                );
                assert_relative_eq!(
                    fd.vega(&p, option_type).unwrap(),
                    bs.vega(option_type),
                    epsilon = 1e-5
                );
                assert_relative_eq!(
                    fd.theta(&p, option_type).unwrap(),
                    bs.theta(option_type),
                    epsilon = 1e-4
                );
            }
        }
    }

    #[test]
    fn test_negative_volatility_vega() {
        let fd = FiniteDifferenceGreeks::default();
        let p = params(-0.3, 1.0, 100.0, 105.0);
        let analytic = BlackScholes::new(p).unwrap().vega(OptionType::Call);
        assert!(analytic < 0.0);
        assert_relative_eq!(
            fd.vega(&p, OptionType::Call).unwrap(),
            analytic,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_zero_spot_uses_forward_stencil() {
        let fd = FiniteDifferenceGreeks::default();
        let p = params(0.2, 1.0, 0.0, 100.0);
        // Deep out of the money call: flat in spot near zero
        assert!(fd.delta(&p, OptionType::Call).unwrap().abs() < 1e-12);
        assert!(fd.gamma(&p, OptionType::Call).unwrap().abs() < 1e-6);
    }

    #[test]
    fn test_theta_near_expiry_uses_forward_stencil() {
        let fd = FiniteDifferenceGreeks::default();
        let p = params(0.2, 0.0, 120.0, 100.0);
        assert!(fd.theta(&p, OptionType::Call).unwrap().is_finite());
    }

    #[test]
    fn test_invalid_params_propagate() {
        let fd = FiniteDifferenceGreeks::default();
        let p = MarketParams {
            strike: -1.0,
            ..params(0.2, 1.0, 100.0, 100.0)
        };
        assert!(matches!(
            fd.delta(&p, OptionType::Call),
            Err(PricingError::NegativeStrike { .. })
        ));
    }
}
