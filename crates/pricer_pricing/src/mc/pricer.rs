//! Monte Carlo pricer for European payoffs under geometric Brownian motion.
//!
//! Terminal spot is sampled in one step,
//! `S_T = S·e^((r-q)τ)·e^(-σ²τ/2 + σ√τ·Z)`, with every standard normal draw
//! used twice (`+Z`, `-Z`) as an antithetic pair. Pairs are split into
//! fixed-size chunks; each chunk owns a generator seeded from the base seed
//! and its index, accumulates a partial sum on one rayon task, and partial
//! sums are merged in chunk order. Results are therefore identical for a
//! fixed seed whatever the thread count.

use pricer_core::types::{MarketParams, OptionType, PricingError};
use rayon::prelude::*;
use tracing::debug;

use super::config::MonteCarloConfig;
use super::result::SimulationResult;
use crate::rng::PricerRng;

/// Sum and sum of squares of antithetic pair means, shifted by the
/// zero-draw payoff to keep the variance estimate well conditioned.
#[derive(Clone, Copy, Debug, Default)]
struct PairAccumulator {
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl PairAccumulator {
    #[inline]
    fn add(&mut self, pair_mean: f64) {
        self.sum += pair_mean;
        self.sum_sq += pair_mean * pair_mean;
        self.count += 1;
    }

    #[inline]
    fn merge(&mut self, other: &Self) {
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.count += other.count;
    }

    /// Standard error of the mean of the pair means.
    fn std_error(&self) -> f64 {
        if self.count < 2 {
            return f64::INFINITY;
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = ((self.sum_sq / n - mean * mean) * n / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    }
}

/// Terminal payoff under one set of market parameters.
#[derive(Clone, Copy, Debug)]
struct TerminalPayoff {
    option_type: OptionType,
    /// `S·e^((r-q)τ - σ²τ/2)`
    growth: f64,
    /// `σ√τ`
    diffusion: f64,
    strike: f64,
}

impl TerminalPayoff {
    fn new(params: &MarketParams, volatility: f64, option_type: OptionType) -> Self {
        let t = params.time_to_expiry;
        let drift = (params.rate - params.dividend_yield - 0.5 * volatility * volatility) * t;
        Self {
            option_type,
            growth: params.spot * drift.exp(),
            diffusion: volatility * t.sqrt(),
            strike: params.strike,
        }
    }

    /// Undiscounted payoff for the normal draw `z`.
    #[inline]
    fn at(&self, z: f64) -> f64 {
        let terminal = self.growth * (self.diffusion * z).exp();
        self.option_type.payoff(terminal - self.strike)
    }
}

/// Monte Carlo pricer for European calls, puts and straddles.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{MarketParams, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(100_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config);
///
/// let params = MarketParams::new(0.2, 1.0, 100.0, 100.0, 0.0, 0.0).unwrap();
/// let result = pricer.price_european(&params, OptionType::Call).unwrap();
///
/// // Closed form: 7.9655...
/// assert!((result.price - 7.9656).abs() < 5.0 * result.std_error);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer from a validated configuration.
    #[inline]
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Estimates the price of a European option.
    ///
    /// A negative volatility is reflected about the discounted intrinsic
    /// value: the `|σ|` estimate `V` becomes `2·intrinsic - V` with the same
    /// standard error.
    ///
    /// # Errors
    ///
    /// - Validation errors of [`MarketParams::validate`]
    /// - Configuration errors of [`MonteCarloConfig::validate`]
    pub fn price_european(
        &self,
        params: &MarketParams,
        option_type: OptionType,
    ) -> Result<SimulationResult, PricingError> {
        params.validate()?;
        self.config.validate()?;

        let seed = self.config.seed().unwrap_or_else(rand::random);
        let volatility = params.volatility;
        let result = self.simulate(params, volatility.abs(), option_type, seed);

        let result = if volatility < 0.0 {
            SimulationResult {
                price: 2.0 * params.intrinsic(option_type) - result.price,
                ..result
            }
        } else {
            result
        };

        debug!(
            price = result.price,
            std_error = result.std_error,
            n_paths = result.n_paths,
            %option_type,
            "monte carlo estimate"
        );
        Ok(result)
    }

    fn simulate(
        &self,
        params: &MarketParams,
        volatility: f64,
        option_type: OptionType,
        seed: u64,
    ) -> SimulationResult {
        let n_paths = self.config.n_paths();
        let n_pairs = n_paths / 2;
        let chunk_size = self.config.chunk_size();
        let n_chunks = n_pairs.div_ceil(chunk_size);
        let payoff = TerminalPayoff::new(params, volatility, option_type);
        let shift = payoff.at(0.0);

        debug!(n_paths, n_pairs, n_chunks, seed, "monte carlo simulation");

        let partials: Vec<PairAccumulator> = (0..n_chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * chunk_size;
                let len = chunk_size.min(n_pairs - start);
                let mut draws = vec![0.0; len];
                PricerRng::for_stream(seed, chunk as u64).fill_normal(&mut draws);

                let mut acc = PairAccumulator::default();
                for &z in &draws {
                    acc.add(0.5 * (payoff.at(z) + payoff.at(-z)) - shift);
                }
                acc
            })
            .collect();

        let pairs = partials
            .iter()
            .fold(PairAccumulator::default(), |mut total, partial| {
                total.merge(partial);
                total
            });

        // An odd path count is completed by one path at the mean draw
        let unpaired = if n_paths % 2 == 1 { shift } else { 0.0 };

        let discount = params.rate_discount();
        let pair_total = pairs.sum + shift * pairs.count as f64;
        let mean = (2.0 * pair_total + unpaired) / n_paths as f64;
        let std_error = if n_pairs == 0 {
            f64::INFINITY
        } else {
            discount * pairs.std_error()
        };

        SimulationResult {
            price: discount * mean,
            std_error,
            n_paths,
        }
    }
}
