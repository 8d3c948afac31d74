//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form Black-Scholes pricing for European calls, puts and straddles.
//!
//! This crate provides:
//! - Analytic price and Greeks (Delta, Gamma, Theta, Vega) with exact
//!   formulas at every degenerate boundary of the parameter space
//! - Negative-volatility reflection about intrinsic value
//! - Finite-difference Greeks for cross-checking the analytic ones
//! - Implied volatility by bracket expansion and bisection
//!
//! ## Design Principles
//!
//! - **Validated once**: `BlackScholes::new` validates `MarketParams`, after
//!   which every pricing method is infallible
//! - **Pure and re-entrant**: no shared state, safe to call from any thread
//! - **Builder-style configuration** with documented defaults

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
