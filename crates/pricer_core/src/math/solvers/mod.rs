//! Root finding for monotone functions.
//!
//! [`BisectionSolver`] solves `f(x) = target` for a non-decreasing `f`:
//! it first widens a starting interval in fixed steps until the target is
//! enclosed, then bisects to the configured width. Both phases are capped
//! by [`SolverConfig::max_iterations`].
//!
//! ```
//! use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! let solver = BisectionSolver::new(SolverConfig::new(1e-12, 200).unwrap(), 0.5);
//! // Cube root of 20, starting from a bracket that misses it
//! let root = solver.solve(|x: f64| x * x * x, 20.0, 0.0, 1.0).unwrap();
//! assert!((root - 20.0_f64.cbrt()).abs() < 1e-11);
//! ```

mod bisection;
mod config;

pub use bisection::{BisectionSolver, Bracket};
pub use config::SolverConfig;
