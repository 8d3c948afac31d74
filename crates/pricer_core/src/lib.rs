//! # pricer_core: Foundation for Black-Scholes Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option type discriminator: `OptionType` (`types::option_type`)
//! - Market inputs and validation: `MarketParams` (`types::market`, `types::validation`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//! - Normal distribution primitives: `norm_cdf`, `norm_pdf`, `norm_inv_cdf` (`math::distributions`)
//! - Bracketing root finder: `BisectionSolver` (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - statrs: Complementary error function and its inverse
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{norm_cdf, norm_inv_cdf};
//! use pricer_core::types::{MarketParams, OptionType};
//!
//! let params = MarketParams::new(0.2, 1.0, 100.0, 100.0, 0.05, 0.01).unwrap();
//! assert!(params.forward_value() > 0.0);
//! assert_eq!(params.intrinsic(OptionType::Put), 0.0);
//!
//! let x = norm_inv_cdf(0.975).unwrap();
//! assert!((norm_cdf(x) - 0.975).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType` and `MarketParams`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
