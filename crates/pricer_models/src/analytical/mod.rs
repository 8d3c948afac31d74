//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes price and analytic Greeks
//! - Finite-difference Greeks on top of the analytic price
//! - Implied volatility inversion of the analytic price
//!
//! ## Design Principles
//!
//! - **Explicit degenerate branches**: zero spot, strike, volatility and
//!   time have closed forms and never produce NaN
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod finite_difference;
pub mod implied_vol;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use finite_difference::FiniteDifferenceGreeks;
pub use implied_vol::{implied_vol, ImpliedVolConfig, BOUND_STEP};
