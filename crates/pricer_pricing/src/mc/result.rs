//! Monte Carlo estimate with its sampling error.

use pricer_core::math::distributions::norm_inv_cdf;
use pricer_core::types::PricingError;

/// Two-sided 95% normal quantile.
const Z_95: f64 = 1.959_963_984_540_054;

/// Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationResult;
///
/// let result = SimulationResult {
///     price: 10.5,
///     std_error: 0.05,
///     n_paths: 1 << 16,
/// };
///
/// let (lo, hi) = result.confidence_95();
/// assert!(lo < 10.5 && 10.5 < hi);
/// assert!(result.confidence_interval(1.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price, estimated from antithetic pair means.
    ///
    /// `+∞` when fewer than two pairs were simulated.
    pub std_error: f64,
    /// Number of simulated terminal values.
    pub n_paths: usize,
}

impl SimulationResult {
    /// Two-sided confidence interval at `level` (e.g. `0.99`).
    ///
    /// # Errors
    /// `PricingError::OutOfRangeQuantile` if `level` is outside [0, 1].
    pub fn confidence_interval(&self, level: f64) -> Result<(f64, f64), PricingError> {
        if !(0.0..=1.0).contains(&level) {
            return Err(PricingError::OutOfRangeQuantile(level));
        }
        let z = norm_inv_cdf(0.5 + 0.5 * level)?;
        Ok(self.interval(z))
    }

    /// Two-sided 95% confidence interval.
    #[inline]
    pub fn confidence_95(&self) -> (f64, f64) {
        self.interval(Z_95)
    }

    #[inline]
    fn interval(&self, z: f64) -> (f64, f64) {
        let half_width = if self.std_error == 0.0 {
            0.0
        } else {
            z * self.std_error
        };
        (self.price - half_width, self.price + half_width)
    }
}
