//! # Pricer Engine (Layer 3: Simulation)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing estimates option prices by simulation, as a statistical
//! cross-check of the closed forms in `pricer_models`:
//! - Seeded random number streams (`rng`)
//! - Antithetic Monte Carlo for European calls, puts and straddles (`mc`)
//!
//! ## Concurrency
//!
//! Paths are split into fixed-size chunks run on the rayon thread pool.
//! Each chunk keeps its own partial sums; there is no shared accumulator
//! and no locking. For a fixed seed the estimate is bit-identical across
//! thread counts.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{MarketParams, OptionType};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder().n_paths(1 << 16).seed(7).build().unwrap();
//! let params = MarketParams::new(0.25, 0.5, 100.0, 100.0, 0.01, 0.0).unwrap();
//!
//! let result = MonteCarloPricer::new(config)
//!     .price_european(&params, OptionType::Straddle)
//!     .unwrap();
//! let (lo, hi) = result.confidence_95();
//! assert!(lo <= result.price && result.price <= hi);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
