//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing, Greeks, simulation and implied volatility
//! - `SolverError`: Errors from the bracketing root finder

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every public operation that can fail returns one of these variants.
/// Degenerate but valid inputs (zero volatility, zero spot, zero strike,
/// zero time to expiry) are never errors.
///
/// # Variants
/// - `InvalidOptionType`: Option type discriminator outside {call, put, straddle}
/// - `NegativeTimeToExpiry`, `NegativeSpot`, `NegativeStrike`: Negative market input
/// - `NonFiniteInput`: NaN or infinite market input
/// - `InvalidEpsilon`: Non-positive bump size or tolerance
/// - `InvalidPathCount`: Zero Monte Carlo paths
/// - `InvalidChunkSize`: Zero Monte Carlo pairs per parallel chunk
/// - `InvalidSearchConfig`: Inconsistent implied volatility search settings
/// - `BoundsNotFound`: Implied volatility bracket expansion failed
/// - `NonConvergence`: Bisection exceeded its iteration budget
/// - `OutOfRangeQuantile`: Inverse CDF input outside [0, 1]
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::NegativeSpot { spot: -1.0 };
/// assert_eq!(format!("{}", err), "Negative spot price: S = -1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Option type discriminator is not one of call, put or straddle.
    #[error("Unknown option type: {0:?}")]
    InvalidOptionType(String),

    /// Time to expiry is negative.
    #[error("Negative time to expiry: τ = {time_to_expiry}")]
    NegativeTimeToExpiry {
        /// The invalid time to expiry
        time_to_expiry: f64,
    },

    /// Spot price is negative.
    #[error("Negative spot price: S = {spot}")]
    NegativeSpot {
        /// The invalid spot price
        spot: f64,
    },

    /// Strike is negative.
    #[error("Negative strike: K = {strike}")]
    NegativeStrike {
        /// The invalid strike
        strike: f64,
    },

    /// A market input is NaN or infinite.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Bump size or convergence tolerance is not strictly positive and finite.
    #[error("Invalid epsilon: {0} (must be positive and finite)")]
    InvalidEpsilon(f64),

    /// Monte Carlo path count is zero.
    #[error("Invalid path count {0}: must be positive")]
    InvalidPathCount(usize),

    /// Monte Carlo chunk size is zero.
    #[error("Invalid chunk size {0}: must be positive")]
    InvalidChunkSize(usize),

    /// Implied volatility search configuration is inconsistent.
    #[error("Invalid search configuration: {0}")]
    InvalidSearchConfig(String),

    /// Bracket expansion could not enclose the target premium.
    #[error(
        "Failed to find {side} bound: bound vol = {bound}, bound price = {price}, iterations = {iterations}"
    )]
    BoundsNotFound {
        /// Which side of the bracket failed ("lower" or "upper")
        side: &'static str,
        /// Last volatility tried
        bound: f64,
        /// Price at the last volatility tried
        price: f64,
        /// Expansion steps taken
        iterations: usize,
    },

    /// Bisection did not converge within the iteration budget.
    #[error(
        "Did not converge: lower = {lower}, upper = {upper}, lower price = {lower_price}, upper price = {upper_price}, iterations = {iterations}"
    )]
    NonConvergence {
        /// Final lower volatility
        lower: f64,
        /// Final upper volatility
        upper: f64,
        /// Price at the final lower volatility
        lower_price: f64,
        /// Price at the final upper volatility
        upper_price: f64,
        /// Bisection steps taken
        iterations: usize,
    },

    /// Inverse CDF called with a probability outside [0, 1].
    #[error("Quantile probability {0} outside [0, 1]")]
    OutOfRangeQuantile(f64),
}

/// Root finder errors.
///
/// Raised by [`BisectionSolver`](crate::math::solvers::BisectionSolver) and
/// converted into [`PricingError`] at the pricing layer.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::InvalidTolerance(0.0);
/// assert!(format!("{}", err).contains("tolerance"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Tolerance is not strictly positive and finite.
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),

    /// Iteration limit is zero.
    #[error("Maximum iterations must be positive")]
    InvalidIterationLimit,

    /// Bracket expansion step is not strictly positive and finite.
    #[error("Invalid expansion step: {0}")]
    InvalidStep(f64),

    /// Bracket endpoints are non-finite or reversed.
    #[error("Invalid bracket: [{lower}, {upper}]")]
    InvalidBracket {
        /// Lower endpoint
        lower: f64,
        /// Upper endpoint
        upper: f64,
    },

    /// Bracket could not be expanded to enclose the target.
    #[error("No {side} bound after {iterations} steps: f({bound}) = {value}")]
    BracketNotFound {
        /// Which side failed ("lower" or "upper")
        side: &'static str,
        /// Last endpoint tried
        bound: f64,
        /// Function value at the last endpoint
        value: f64,
        /// Expansion steps taken
        iterations: usize,
    },

    /// Bisection exhausted its iteration budget.
    #[error("Failed to converge after {iterations} iterations in [{lower}, {upper}]")]
    MaxIterationsExceeded {
        /// Final lower endpoint
        lower: f64,
        /// Final upper endpoint
        upper: f64,
        /// Function value at the lower endpoint
        f_lower: f64,
        /// Function value at the upper endpoint
        f_upper: f64,
        /// Iterations performed
        iterations: usize,
    },
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::InvalidTolerance(tolerance) => PricingError::InvalidEpsilon(tolerance),
            SolverError::InvalidIterationLimit
            | SolverError::InvalidStep(_)
            | SolverError::InvalidBracket { .. } => {
                PricingError::InvalidSearchConfig(err.to_string())
            }
            SolverError::BracketNotFound {
                side,
                bound,
                value,
                iterations,
            } => PricingError::BoundsNotFound {
                side,
                bound,
                price: value,
                iterations,
            },
            SolverError::MaxIterationsExceeded {
                lower,
                upper,
                f_lower,
                f_upper,
                iterations,
            } => PricingError::NonConvergence {
                lower,
                upper,
                lower_price: f_lower,
                upper_price: f_upper,
                iterations,
            },
        }
    }
}
