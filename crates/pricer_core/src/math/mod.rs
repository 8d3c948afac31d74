//! Numerical building blocks.
//!
//! - `distributions`: Standard normal CDF, PDF and quantile
//! - `solvers`: Bracket-expanding bisection for monotone functions

pub mod distributions;
pub mod solvers;
