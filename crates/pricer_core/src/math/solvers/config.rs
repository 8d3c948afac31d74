//! Solver configuration types.

use num_traits::Float;

use crate::types::SolverError;

/// Configuration for bracketing root finders.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, 1.0 / (1u64 << 30) as f64);
/// assert_eq!(config.max_iterations, 1_000_000);
///
/// let custom = SolverConfig::new(1e-12, 200).unwrap();
/// assert_eq!(custom.max_iterations, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the bracket width.
    ///
    /// The solver stops once `upper - lower < tolerance`.
    pub tolerance: T,

    /// Maximum number of steps for each phase (expansion, bisection).
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 2⁻³⁰
    /// - `max_iterations`: 1,000,000
    fn default() -> Self {
        Self {
            tolerance: T::from(2.0_f64.powi(-30)).unwrap_or_else(T::epsilon),
            max_iterations: 1_000_000,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// - `SolverError::InvalidTolerance` if `tolerance` is not positive and finite
    /// - `SolverError::InvalidIterationLimit` if `max_iterations == 0`
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        let config = Self {
            tolerance,
            max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance.is_finite() && self.tolerance > T::zero()) {
            return Err(SolverError::InvalidTolerance(
                self.tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidIterationLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert_eq!(config.tolerance, 9.313225746154785e-10);
        assert_eq!(config.max_iterations, 1_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-12, 200).unwrap();
        assert_eq!(config.tolerance, 1e-12);
        assert_eq!(config.max_iterations, 200);
    }

    #[test]
    fn test_zero_tolerance_rejected() {
        assert_eq!(
            SolverConfig::<f64>::new(0.0, 100),
            Err(SolverError::InvalidTolerance(0.0))
        );
        assert!(SolverConfig::<f64>::new(-1e-10, 100).is_err());
        assert!(SolverConfig::<f64>::new(f64::NAN, 100).is_err());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert_eq!(
            SolverConfig::<f64>::new(1e-10, 0),
            Err(SolverError::InvalidIterationLimit)
        );
    }

    #[test]
    fn test_config_with_f32() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!(config.tolerance > 0.0);
    }
}
