//! Implied volatility by bracket expansion and bisection.
//!
//! The analytic price is non-decreasing in signed volatility (negative σ
//! reflects about intrinsic value), so the premium is inverted by widening
//! `[lower_bound, upper_bound]` in steps of [`BOUND_STEP`] until it encloses
//! the premium, then bisecting.

use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
use pricer_core::types::validation::check_finite;
use pricer_core::types::{MarketParams, OptionType, PricingError};
use tracing::{debug, trace};

use super::black_scholes::BlackScholes;

/// Volatility step used when the initial bracket misses the premium.
pub const BOUND_STEP: f64 = 0.47;

/// Implied volatility search configuration.
///
/// # Examples
/// ```
/// use pricer_models::analytical::ImpliedVolConfig;
///
/// let config = ImpliedVolConfig::default()
///     .with_tolerance(1e-12)
///     .with_upper_bound(3.0);
/// assert_eq!(config.lower_bound, 0.01);
/// assert!(config.validate().is_ok());
///
/// assert!(ImpliedVolConfig::default().with_tolerance(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpliedVolConfig {
    /// Initial lower volatility bound
    pub lower_bound: f64,
    /// Initial upper volatility bound
    pub upper_bound: f64,
    /// Convergence tolerance on the bracket width
    pub tolerance: f64,
    /// Step cap for bracket expansion and for bisection
    pub max_iterations: usize,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            lower_bound: 0.01,
            upper_bound: 1.99,
            tolerance: 2.0_f64.powi(-30),
            max_iterations: 1_000_000,
        }
    }
}

impl ImpliedVolConfig {
    /// Set the initial lower bound.
    pub fn with_lower_bound(mut self, lower_bound: f64) -> Self {
        self.lower_bound = lower_bound;
        self
    }

    /// Set the initial upper bound.
    pub fn with_upper_bound(mut self, upper_bound: f64) -> Self {
        self.upper_bound = upper_bound;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// - `PricingError::InvalidEpsilon` if the tolerance is not positive and finite
    /// - `PricingError::InvalidSearchConfig` for a zero iteration cap,
    ///   non-finite bounds or `lower_bound > upper_bound`
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(PricingError::InvalidEpsilon(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(PricingError::InvalidSearchConfig(
                "max_iterations must be positive".to_string(),
            ));
        }
        if !(self.lower_bound.is_finite() && self.upper_bound.is_finite()) {
            return Err(PricingError::InvalidSearchConfig(format!(
                "bounds must be finite: [{}, {}]",
                self.lower_bound, self.upper_bound
            )));
        }
        if self.lower_bound > self.upper_bound {
            return Err(PricingError::InvalidSearchConfig(format!(
                "lower bound {} exceeds upper bound {}",
                self.lower_bound, self.upper_bound
            )));
        }
        Ok(())
    }

    fn solver(&self) -> BisectionSolver<f64> {
        BisectionSolver::new(
            SolverConfig {
                tolerance: self.tolerance,
                max_iterations: self.max_iterations,
            },
            BOUND_STEP,
        )
    }
}

/// Volatility at which the analytic price equals `premium`.
///
/// The volatility field of `params` is ignored.
///
/// Returns `0.0` without searching when `τ`, `S` or `K` is zero, or when
/// the premium carries no extrinsic value. A premium below intrinsic value
/// yields a negative volatility.
///
/// # Errors
/// - Validation errors of [`MarketParams::validate`] (volatility aside), or
///   `NonFiniteInput` for a NaN or infinite premium
/// - Configuration errors of [`ImpliedVolConfig::validate`]
/// - `PricingError::BoundsNotFound` if the bracket cannot enclose the premium
/// - `PricingError::NonConvergence` if bisection exhausts `max_iterations`
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, OptionType};
/// use pricer_models::analytical::{implied_vol, BlackScholes, ImpliedVolConfig};
///
/// let params = MarketParams::new(0.35, 0.5, 100.0, 110.0, 0.02, 0.0).unwrap();
/// let premium = BlackScholes::new(params).unwrap().price(OptionType::Put);
///
/// let vol = implied_vol(premium, &params, OptionType::Put, &ImpliedVolConfig::default()).unwrap();
/// assert!((vol - 0.35).abs() < 1e-8);
/// ```
pub fn implied_vol(
    premium: f64,
    params: &MarketParams,
    option_type: OptionType,
    config: &ImpliedVolConfig,
) -> Result<f64, PricingError> {
    let params = params.with_volatility(0.0);
    params.validate()?;
    check_finite("premium", premium)?;
    config.validate()?;

    if params.time_to_expiry == 0.0 || params.spot == 0.0 || params.strike == 0.0 {
        return Ok(0.0);
    }

    let intrinsic = params.intrinsic(option_type);
    let extrinsic = premium - intrinsic;
    if extrinsic.abs() < f64::MIN_POSITIVE {
        return Ok(0.0);
    }

    let price_at = |vol: f64| -> Result<f64, PricingError> {
        let price = BlackScholes::new(params.with_volatility(vol))?.price(option_type);
        trace!(vol, price, "implied vol trial");
        Ok(price)
    };

    let solver = config.solver();
    let bracket =
        solver.try_expand_bracket(&price_at, premium, config.lower_bound, config.upper_bound)?;
    debug!(
        lower = bracket.lower,
        upper = bracket.upper,
        steps = bracket.iterations,
        "implied vol bracket found"
    );

    let vol = correct_vol_sign(extrinsic, solver.try_bisect(&price_at, premium, bracket)?);
    debug!(vol, premium, %option_type, "implied vol converged");
    Ok(vol)
}

/// Flip `vol` when its sign disagrees with the sign of the extrinsic value.
#[inline]
fn correct_vol_sign(extrinsic: f64, vol: f64) -> f64 {
    if (extrinsic > 0.0 && vol < 0.0) || (extrinsic < 0.0 && vol > 0.0) {
        -vol
    } else {
        vol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(vol: f64, t: f64, s: f64, k: f64, r: f64, q: f64) -> MarketParams {
        MarketParams::new(vol, t, s, k, r, q).unwrap()
    }

    fn round_trip(p: MarketParams, option_type: OptionType) -> f64 {
        let premium = BlackScholes::new(p).unwrap().price(option_type);
        implied_vol(premium, &p, option_type, &ImpliedVolConfig::default()).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ImpliedVolConfig::default();
        assert_eq!(config.lower_bound, 0.01);
        assert_eq!(config.upper_bound, 1.99);
        assert_eq!(config.tolerance, 9.313225746154785e-10);
        assert_eq!(config.max_iterations, 1_000_000);
    }

    #[test]
    fn test_config_validation() {
        let config = ImpliedVolConfig::default();
        assert_eq!(
            config.with_tolerance(-1.0).validate(),
            Err(PricingError::InvalidEpsilon(-1.0))
        );
        assert!(matches!(
            config.with_max_iterations(0).validate(),
            Err(PricingError::InvalidSearchConfig(_))
        ));
        assert!(matches!(
            config.with_lower_bound(2.5).validate(),
            Err(PricingError::InvalidSearchConfig(_))
        ));
        assert!(matches!(
            config.with_upper_bound(f64::INFINITY).validate(),
            Err(PricingError::InvalidSearchConfig(_))
        ));
    }

    #[test]
    fn test_round_trip_reference() {
        for option_type in OptionType::ALL {
            let vol = round_trip(params(0.2, 1.0, 100.0, 100.0, 0.05, 0.01), option_type);
            assert_relative_eq!(vol, 0.2, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_round_trip_outside_initial_bracket() {
        let vol = round_trip(params(3.5, 1.0, 100.0, 100.0, 0.0, 0.0), OptionType::Call);
        assert_relative_eq!(vol, 3.5, epsilon = 1e-7);

        let vol = round_trip(params(0.005, 1.0, 100.0, 100.0, 0.0, 0.0), OptionType::Straddle);
        assert_relative_eq!(vol, 0.005, epsilon = 1e-8);
    }

    #[test]
    fn test_round_trip_negative_volatility() {
        let vol = round_trip(params(-0.15, 1.0, 100.0, 100.0, 0.03, 0.0), OptionType::Call);
        assert_relative_eq!(vol, -0.15, epsilon = 1e-8);
    }

    #[test]
    fn test_degenerate_inputs_return_zero() {
        let config = ImpliedVolConfig::default();
        let cases = [
            params(0.0, 0.0, 100.0, 90.0, 0.0, 0.0),
            params(0.0, 1.0, 0.0, 90.0, 0.0, 0.0),
            params(0.0, 1.0, 100.0, 0.0, 0.0, 0.0),
        ];
        for p in cases {
            assert_eq!(implied_vol(5.0, &p, OptionType::Call, &config).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_premium_at_intrinsic_returns_zero() {
        let p = params(0.0, 1.0, 100.0, 90.0, 0.0, 0.0);
        let vol = implied_vol(10.0, &p, OptionType::Call, &ImpliedVolConfig::default()).unwrap();
        assert_eq!(vol, 0.0);
    }

    #[test]
    fn test_premium_above_spot_bound_not_found() {
        let p = params(0.0, 1.0, 100.0, 100.0, 0.0, 0.0);
        let config = ImpliedVolConfig::default().with_max_iterations(50);
        let err = implied_vol(150.0, &p, OptionType::Call, &config).unwrap_err();
        match err {
            PricingError::BoundsNotFound {
                side, iterations, ..
            } => {
                assert_eq!(side, "upper");
                assert_eq!(iterations, 50);
            }
            other => panic!("Expected BoundsNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_non_convergence() {
        let p = params(0.0, 1.0, 100.0, 100.0, 0.0, 0.0);
        let config = ImpliedVolConfig::default().with_max_iterations(5);
        let err = implied_vol(8.0, &p, OptionType::Call, &config).unwrap_err();
        assert!(matches!(
            err,
            PricingError::NonConvergence { iterations: 5, .. }
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        let config = ImpliedVolConfig::default();
        let p = MarketParams {
            spot: -100.0,
            ..params(0.0, 1.0, 100.0, 100.0, 0.0, 0.0)
        };
        assert!(matches!(
            implied_vol(5.0, &p, OptionType::Call, &config),
            Err(PricingError::NegativeSpot { .. })
        ));

        let p = params(0.0, 1.0, 100.0, 100.0, 0.0, 0.0);
        assert!(matches!(
            implied_vol(f64::NAN, &p, OptionType::Call, &config),
            Err(PricingError::NonFiniteInput { name: "premium", .. })
        ));
        assert!(matches!(
            implied_vol(f64::INFINITY, &p, OptionType::Call, &config),
            Err(PricingError::NonFiniteInput { name: "premium", .. })
        ));
    }

    #[test]
    fn test_input_volatility_is_ignored() {
        let p = params(0.2, 1.0, 100.0, 100.0, 0.05, 0.01);
        let premium = BlackScholes::new(p).unwrap().price(OptionType::Call);
        let config = ImpliedVolConfig::default();

        for vol in [f64::NAN, f64::INFINITY, -3.0] {
            let unpriced = MarketParams {
                volatility: vol,
                ..p
            };
            let solved = implied_vol(premium, &unpriced, OptionType::Call, &config).unwrap();
            assert_relative_eq!(solved, 0.2, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_correct_vol_sign() {
        assert_eq!(correct_vol_sign(1.0, -0.2), 0.2);
        assert_eq!(correct_vol_sign(-1.0, 0.2), -0.2);
        assert_eq!(correct_vol_sign(1.0, 0.2), 0.2);
        assert_eq!(correct_vol_sign(-1.0, -0.2), -0.2);
    }
}
