//! Market input validation shared by the pricing engine, the simulator and
//! the implied volatility solver.
//!
//! Checks run in a fixed order: non-finite inputs first, then time to expiry,
//! spot and strike. The option type is validated when it is parsed into
//! [`OptionType`](super::OptionType).

use super::error::PricingError;

/// Fails with [`PricingError::NonFiniteInput`] if `value` is NaN or infinite.
#[inline]
pub fn check_finite(name: &'static str, value: f64) -> Result<(), PricingError> {
    if !value.is_finite() {
        return Err(PricingError::NonFiniteInput { name, value });
    }
    Ok(())
}

/// Validates the constrained market inputs.
///
/// # Errors
/// - `NonFiniteInput` if any input is NaN or infinite
/// - `NegativeTimeToExpiry` if `time_to_expiry < 0`
/// - `NegativeSpot` if `spot < 0`
/// - `NegativeStrike` if `strike < 0`
///
/// # Examples
/// ```
/// use pricer_core::types::validation::check_price_params;
///
/// assert!(check_price_params(1.0, 100.0, 100.0).is_ok());
/// assert!(check_price_params(0.0, 0.0, 0.0).is_ok());
/// assert!(check_price_params(-1.0, 100.0, 100.0).is_err());
/// assert!(check_price_params(f64::INFINITY, 100.0, 100.0).is_err());
/// ```
pub fn check_price_params(
    time_to_expiry: f64,
    spot: f64,
    strike: f64,
) -> Result<(), PricingError> {
    check_finite("time_to_expiry", time_to_expiry)?;
    check_finite("spot", spot)?;
    check_finite("strike", strike)?;

    if time_to_expiry < 0.0 {
        return Err(PricingError::NegativeTimeToExpiry { time_to_expiry });
    }
    if spot < 0.0 {
        return Err(PricingError::NegativeSpot { spot });
    }
    if strike < 0.0 {
        return Err(PricingError::NegativeStrike { strike });
    }
    Ok(())
}

/// Validates a finite-difference bump or convergence tolerance.
///
/// # Errors
/// `InvalidEpsilon` unless `epsilon` is strictly positive and finite.
#[inline]
pub fn check_epsilon(epsilon: f64) -> Result<(), PricingError> {
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(PricingError::InvalidEpsilon(epsilon));
    }
    Ok(())
}
