//! # Random Number Generation Infrastructure
//!
//! Seeded pseudo-random number generation for Monte Carlo simulation.
//!
//! - **Reproducibility**: All generators support seeding for deterministic sequences
//! - **Stream splitting**: [`PricerRng::for_stream`] derives an independent,
//!   fixed generator per parallel chunk
//! - **Efficiency**: Batch normal generation into `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::for_stream(12345, 3);
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
