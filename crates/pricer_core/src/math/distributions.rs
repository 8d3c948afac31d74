//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//! - `norm_inv_cdf`: Quantile function Φ⁻¹
//!
//! The CDF and quantile are built on the complementary error function and
//! its inverse from `statrs`, which stay accurate in the tails where
//! `1 - erf` would cancel.

use statrs::function::erf::{erfc, erfc_inv};

use crate::types::PricingError;

/// 1 / sqrt(2π)
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½·erfc(-x / √2)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-14);
/// assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x²/2) / √(2π)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal quantile function.
///
/// Φ⁻¹(p) = -√2·erfc⁻¹(2p), with Φ⁻¹(0) = -∞ and Φ⁻¹(1) = +∞.
///
/// # Errors
/// `OutOfRangeQuantile` if `p` is outside [0, 1] or NaN.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_inv_cdf;
///
/// let z = norm_inv_cdf(0.975).unwrap();
/// assert!((z - 1.959963984540054).abs() < 1e-9);
/// assert!(norm_inv_cdf(1.5).is_err());
/// ```
pub fn norm_inv_cdf(p: f64) -> Result<f64, PricingError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(PricingError::OutOfRangeQuantile(p));
    }
    if p == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    if p == 1.0 {
        return Ok(f64::INFINITY);
    }
    Ok(-std::f64::consts::SQRT_2 * erfc_inv(2.0 * p))
}
