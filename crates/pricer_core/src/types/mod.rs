//! Core market and error types.
//!
//! This module provides:
//! - `option_type`: The call/put/straddle discriminator
//! - `market`: Black-Scholes market parameters and intrinsic value
//! - `validation`: Input checks shared by every public operation
//! - `error`: Structured error types for pricing and solver operations
//!
//! # Re-exports
//!
//! - [`OptionType`] from `option_type`
//! - [`MarketParams`] from `market`
//! - [`PricingError`], [`SolverError`] from `error`

pub mod error;
pub mod market;
pub mod option_type;
pub mod validation;

pub use error::{PricingError, SolverError};
pub use market::MarketParams;
pub use option_type::OptionType;
