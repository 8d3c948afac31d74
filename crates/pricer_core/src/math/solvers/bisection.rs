//! Bracket expansion followed by bisection.

use num_traits::Float;

use super::config::SolverConfig;
use crate::types::SolverError;

/// Interval known to enclose the target value of a non-decreasing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    /// Lower endpoint.
    pub lower: T,
    /// Upper endpoint.
    pub upper: T,
    /// Function value at `lower` (at most the target).
    pub f_lower: T,
    /// Function value at `upper` (at least the target).
    pub f_upper: T,
    /// Expansion steps needed to reach this interval.
    pub iterations: usize,
}

/// Root finder for `f(x) = target` where `f` is non-decreasing.
///
/// The starting interval is widened by `step` on whichever side misses the
/// target until `f(lower) <= target <= f(upper)`. The interval is then
/// halved until it is narrower than the tolerance, the midpoint hits the
/// target exactly, or floating-point resolution stops the midpoint from
/// narrowing the interval.
///
/// The `try_*` methods accept fallible functions; their error type only
/// needs a conversion from [`SolverError`].
#[derive(Debug, Clone, Copy)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
    step: T,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a solver with the given configuration and expansion step.
    pub fn new(config: SolverConfig<T>, step: T) -> Self {
        Self { config, step }
    }

    /// Solver configuration.
    #[inline]
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Bracket expansion step.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    fn validate(&self, lower: T, upper: T) -> Result<(), SolverError> {
        self.config.validate()?;
        if !(self.step.is_finite() && self.step > T::zero()) {
            return Err(SolverError::InvalidStep(as_f64(self.step)));
        }
        if !(lower.is_finite() && upper.is_finite() && lower <= upper) {
            return Err(SolverError::InvalidBracket {
                lower: as_f64(lower),
                upper: as_f64(upper),
            });
        }
        Ok(())
    }

    /// Widen `[lower, upper]` until it encloses `target`.
    ///
    /// # Errors
    ///
    /// - `SolverError::InvalidStep`, `InvalidBracket` or a config error on bad setup
    /// - `SolverError::BracketNotFound` once `max_iterations` steps have been taken
    /// - any error returned by `f`
    pub fn try_expand_bracket<F, E>(
        &self,
        mut f: F,
        target: T,
        lower: T,
        upper: T,
    ) -> Result<Bracket<T>, E>
    where
        F: FnMut(T) -> Result<T, E>,
        E: From<SolverError>,
    {
        self.validate(lower, upper)?;

        let (mut lower, mut upper) = (lower, upper);
        let mut f_lower = f(lower)?;
        let mut f_upper = f(upper)?;
        let mut iterations = 0;

        while target < f_lower || f_upper < target {
            if iterations >= self.config.max_iterations {
                let (side, bound, value) = if target < f_lower {
                    ("lower", lower, f_lower)
                } else {
                    ("upper", upper, f_upper)
                };
                return Err(SolverError::BracketNotFound {
                    side,
                    bound: as_f64(bound),
                    value: as_f64(value),
                    iterations,
                }
                .into());
            }
            if target < f_lower {
                lower = lower - self.step;
                f_lower = f(lower)?;
            }
            if f_upper < target {
                upper = upper + self.step;
                f_upper = f(upper)?;
            }
            iterations += 1;
        }

        Ok(Bracket {
            lower,
            upper,
            f_lower,
            f_upper,
            iterations,
        })
    }

    /// Bisect an enclosing bracket down to the configured tolerance.
    ///
    /// # Errors
    ///
    /// - `SolverError::MaxIterationsExceeded` when the budget runs out
    /// - any error returned by `f`
    pub fn try_bisect<F, E>(&self, mut f: F, target: T, bracket: Bracket<T>) -> Result<T, E>
    where
        F: FnMut(T) -> Result<T, E>,
        E: From<SolverError>,
    {
        let two = T::one() + T::one();
        let Bracket {
            mut lower,
            mut upper,
            mut f_lower,
            mut f_upper,
            ..
        } = bracket;
        let mut iterations = 0;

        while upper - lower >= self.config.tolerance {
            if iterations >= self.config.max_iterations {
                return Err(SolverError::MaxIterationsExceeded {
                    lower: as_f64(lower),
                    upper: as_f64(upper),
                    f_lower: as_f64(f_lower),
                    f_upper: as_f64(f_upper),
                    iterations,
                }
                .into());
            }

            let mid = lower + (upper - lower) / two;
            if !(lower < mid && mid < upper) {
                break;
            }

            let f_mid = f(mid)?;
            if f_mid == target {
                return Ok(mid);
            }
            if target < f_mid {
                upper = mid;
                f_upper = f_mid;
            } else {
                lower = mid;
                f_lower = f_mid;
            }
            iterations += 1;
        }

        Ok(lower + (upper - lower) / two)
    }

    /// Expand then bisect, for a fallible function.
    pub fn try_solve<F, E>(&self, mut f: F, target: T, lower: T, upper: T) -> Result<T, E>
    where
        F: FnMut(T) -> Result<T, E>,
        E: From<SolverError>,
    {
        let bracket = self.try_expand_bracket(&mut f, target, lower, upper)?;
        self.try_bisect(f, target, bracket)
    }

    /// Widen `[lower, upper]` until it encloses `target`.
    pub fn expand_bracket<F>(
        &self,
        mut f: F,
        target: T,
        lower: T,
        upper: T,
    ) -> Result<Bracket<T>, SolverError>
    where
        F: FnMut(T) -> T,
    {
        self.try_expand_bracket(|x| Ok(f(x)), target, lower, upper)
    }

    /// Bisect an enclosing bracket down to the configured tolerance.
    pub fn bisect<F>(&self, mut f: F, target: T, bracket: Bracket<T>) -> Result<T, SolverError>
    where
        F: FnMut(T) -> T,
    {
        self.try_bisect(|x| Ok(f(x)), target, bracket)
    }

    /// Solve `f(x) = target` starting from `[lower, upper]`.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
    ///
    /// let solver = BisectionSolver::new(SolverConfig::default(), 0.47);
    /// let root = solver.solve(|x: f64| 2.0 * x + 1.0, 5.0, -1.0, 1.0).unwrap();
    /// assert!((root - 2.0).abs() < 1e-9);
    /// ```
    pub fn solve<F>(&self, mut f: F, target: T, lower: T, upper: T) -> Result<T, SolverError>
    where
        F: FnMut(T) -> T,
    {
        self.try_solve(|x| Ok(f(x)), target, lower, upper)
    }
}

#[inline]
fn as_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
