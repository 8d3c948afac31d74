//! Monte Carlo pricing of European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (path count, seed, chunk size)
//! ├── PricerRng         (one seeded stream per chunk)
//! └── Orchestration
//!     ├── antithetic pairs per chunk, in parallel (rayon)
//!     ├── partial sums merged in chunk order
//!     └── SimulationResult (price, standard error, confidence intervals)
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricer_core::types::{MarketParams, OptionType};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder().n_paths(10_000).seed(42).build().unwrap();
//! let pricer = MonteCarloPricer::new(config);
//!
//! let params = MarketParams::new(0.2, 1.0, 100.0, 110.0, 0.03, 0.0).unwrap();
//! let call = pricer.price_european(&params, OptionType::Call).unwrap();
//! let put = pricer.price_european(&params, OptionType::Put).unwrap();
//! assert!(call.price > 0.0 && put.price > 0.0);
//! ```

mod config;
mod pricer;
mod result;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_CHUNK_SIZE, DEFAULT_PATHS};
pub use pricer::MonteCarloPricer;
pub use result::SimulationResult;
