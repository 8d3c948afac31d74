//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form prices and first-order Greeks for
//! calls, puts and straddles on an underlying paying a continuous
//! dividend yield.
//!
//! ## Mathematical Formulas
//!
//! With discounted spot `S' = S·e^(-qτ)` and discounted strike `K' = K·e^(-rτ)`:
//!
//! **Call Price**: C = S'·N(d₁) - K'·N(d₂)
//! **Put Price**: P = K'·N(-d₂) - S'·N(-d₁)
//! **Straddle Price**: C + P
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)τ) / (σ√τ)
//! - d₂ = d₁ - σ√τ
//!
//! ## Degenerate Regimes
//!
//! Checked in order, first match wins:
//! 1. `S = 0`: worth `put_weight · K'`
//! 2. `K = 0`: worth `call_weight · S'`
//! 3. `σ = 0` (or `τ = 0` for everything except Theta): intrinsic value
//! 4. `τ = 0` (Theta only): `-∞`
//!
//! ## Negative Volatility
//!
//! A negative σ reflects the `|σ|` result about the zero-volatility value:
//! `f(σ) = 2·f(0) - f(|σ|)` for Price, Delta, Gamma and Theta, while Vega is
//! `-Vega(|σ|)`.

use pricer_core::math::distributions::{norm_cdf, norm_pdf, FRAC_1_SQRT_2PI};
use pricer_core::types::{MarketParams, OptionType, PricingError};

/// Price and first-order Greeks of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Option value
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// -∂V/∂τ (value decay per year of calendar time)
    pub theta: f64,
    /// ∂V/∂σ
    pub vega: f64,
}

/// Black-Scholes model for European option pricing.
///
/// Holds validated market parameters; every pricing method is then
/// infallible and pure.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, OptionType};
/// use pricer_models::analytical::BlackScholes;
///
/// let params = MarketParams::new(0.2, 1.0, 100.0, 100.0, 0.05, 0.01).unwrap();
/// let bs = BlackScholes::new(params).unwrap();
///
/// let call = bs.price(OptionType::Call);
/// let put = bs.price(OptionType::Put);
///
/// // Put-call parity: C - P = S·e^(-qτ) - K·e^(-rτ)
/// assert!((call - put - params.forward_value()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    params: MarketParams,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `PricingError::NegativeTimeToExpiry`, `NegativeSpot`, `NegativeStrike`
    /// - `PricingError::NonFiniteInput` for a NaN input
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::MarketParams;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let params = MarketParams {
    ///     volatility: 0.2,
    ///     time_to_expiry: 1.0,
    ///     spot: -100.0,
    ///     strike: 100.0,
    ///     rate: 0.0,
    ///     dividend_yield: 0.0,
    /// };
    /// assert!(BlackScholes::new(params).is_err());
    /// ```
    pub fn new(params: MarketParams) -> Result<Self, PricingError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Returns the market parameters.
    #[inline]
    pub fn params(&self) -> &MarketParams {
        &self.params
    }

    /// Option value.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{MarketParams, OptionType};
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let params = MarketParams::new(0.2, 1.0, 100.0, 100.0, 0.0, 0.0).unwrap();
    /// let bs = BlackScholes::new(params).unwrap();
    /// assert!((bs.price(OptionType::Call) - 7.965567455405804).abs() < 1e-10);
    /// ```
    pub fn price(&self, option_type: OptionType) -> f64 {
        self.reflect(|vol| self.price_at(vol, option_type))
    }

    /// Sensitivity to spot.
    pub fn delta(&self, option_type: OptionType) -> f64 {
        self.reflect(|vol| self.delta_at(vol, option_type))
    }

    /// Second-order sensitivity to spot.
    ///
    /// `+∞` at zero volatility when the forward value is exactly zero.
    pub fn gamma(&self, option_type: OptionType) -> f64 {
        self.reflect(|vol| self.gamma_at(vol, option_type))
    }

    /// Time decay, `-∂V/∂τ`.
    ///
    /// `-∞` at expiry for non-zero volatility (`+∞` under the
    /// negative-volatility reflection).
    pub fn theta(&self, option_type: OptionType) -> f64 {
        self.reflect(|vol| self.theta_at(vol, option_type))
    }

    /// Sensitivity to volatility.
    ///
    /// For `σ < 0` this is `-Vega(|σ|)`.
    pub fn vega(&self, option_type: OptionType) -> f64 {
        let vol = self.params.volatility;
        if vol < 0.0 {
            -self.vega_at(-vol, option_type)
        } else {
            self.vega_at(vol, option_type)
        }
    }

    /// Price and all Greeks at once.
    pub fn greeks(&self, option_type: OptionType) -> Greeks {
        Greeks {
            price: self.price(option_type),
            delta: self.delta(option_type),
            gamma: self.gamma(option_type),
            theta: self.theta(option_type),
            vega: self.vega(option_type),
        }
    }

    /// Applies the negative-volatility reflection `2·f(0) - f(|σ|)`.
    ///
    /// An infinite `f(0)` is returned as is.
    #[inline]
    fn reflect(&self, f: impl Fn(f64) -> f64) -> f64 {
        let vol = self.params.volatility;
        if vol < 0.0 {
            let at_zero = f(0.0);
            if at_zero.is_infinite() {
                return at_zero;
            }
            2.0 * at_zero - f(-vol)
        } else {
            f(vol)
        }
    }

    /// `σ√τ == 0`: the distribution of the terminal spot collapses to a point.
    #[inline]
    fn is_deterministic(&self, vol: f64) -> bool {
        vol == 0.0 || self.params.time_to_expiry == 0.0
    }

    /// d₁ and d₂ for strictly positive `vol`, `τ`, `S` and `K`.
    #[inline]
    fn d1_d2(&self, vol: f64) -> (f64, f64) {
        let p = &self.params;
        let vol_sqrt_t = vol * p.time_to_expiry.sqrt();
        let log_moneyness = (p.spot / p.strike).ln();
        let drift = (p.rate - p.dividend_yield + 0.5 * vol * vol) * p.time_to_expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// Probability weight of finishing in the money once the spread is gone:
    /// 1 above the forward, 0 below, ½ at the money.
    #[inline]
    fn deterministic_weight(&self) -> f64 {
        let forward = self.params.forward_value();
        if forward > 0.0 {
            1.0
        } else if forward < 0.0 {
            0.0
        } else {
            0.5
        }
    }

    fn price_at(&self, vol: f64, option_type: OptionType) -> f64 {
        let p = &self.params;
        if p.spot == 0.0 {
            return option_type.put_weight() * p.discounted_strike();
        }
        if p.strike == 0.0 {
            return option_type.call_weight() * p.discounted_spot();
        }
        if self.is_deterministic(vol) {
            return p.intrinsic(option_type);
        }

        let (d1, d2) = self.d1_d2(vol);
        p.discounted_spot() * leg_cdf(option_type, d1)
            - p.discounted_strike() * leg_cdf(option_type, d2)
    }

    fn delta_at(&self, vol: f64, option_type: OptionType) -> f64 {
        let p = &self.params;
        if p.spot == 0.0 {
            return -option_type.put_weight() * p.dividend_discount();
        }
        if p.strike == 0.0 {
            return option_type.call_weight() * p.dividend_discount();
        }
        if self.is_deterministic(vol) {
            return p.dividend_discount() * leg_weight(option_type, self.deterministic_weight());
        }

        let (d1, _) = self.d1_d2(vol);
        p.dividend_discount() * leg_cdf(option_type, d1)
    }

    fn gamma_at(&self, vol: f64, option_type: OptionType) -> f64 {
        let p = &self.params;
        if p.spot == 0.0 || p.strike == 0.0 {
            return 0.0;
        }
        if self.is_deterministic(vol) {
            return if p.forward_value() == 0.0 {
                f64::INFINITY
            } else {
                0.0
            };
        }

        let (d1, _) = self.d1_d2(vol);
        legs(option_type) * p.dividend_discount() * norm_pdf(d1)
            / (p.spot * vol * p.time_to_expiry.sqrt())
    }

    fn theta_at(&self, vol: f64, option_type: OptionType) -> f64 {
        let p = &self.params;
        if p.spot == 0.0 {
            return option_type.put_weight() * p.rate * p.discounted_strike();
        }
        if p.strike == 0.0 {
            return option_type.call_weight() * p.dividend_yield * p.discounted_spot();
        }
        let carry = p.dividend_yield * p.discounted_spot();
        let funding = p.rate * p.discounted_strike();
        if vol == 0.0 {
            return (carry - funding) * leg_weight(option_type, self.deterministic_weight());
        }
        if p.time_to_expiry == 0.0 {
            return f64::NEG_INFINITY;
        }

        let (d1, d2) = self.d1_d2(vol);
        let sqrt_t = p.time_to_expiry.sqrt();
        let decay = -p.discounted_spot() * vol * norm_pdf(d1) / (2.0 * sqrt_t);
        legs(option_type) * decay + carry * leg_cdf(option_type, d1)
            - funding * leg_cdf(option_type, d2)
    }

    fn vega_at(&self, vol: f64, option_type: OptionType) -> f64 {
        let p = &self.params;
        if p.spot == 0.0 || p.strike == 0.0 {
            return 0.0;
        }
        let sqrt_t = p.time_to_expiry.sqrt();
        if self.is_deterministic(vol) {
            return if p.forward_value() == 0.0 {
                legs(option_type) * p.discounted_spot() * sqrt_t * FRAC_1_SQRT_2PI
            } else {
                0.0
            };
        }

        let (d1, _) = self.d1_d2(vol);
        legs(option_type) * p.discounted_spot() * sqrt_t * norm_pdf(d1)
    }
}

/// Number of option legs: 2 for a straddle, 1 otherwise.
#[inline]
fn legs(option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Straddle => 2.0,
        OptionType::Call | OptionType::Put => 1.0,
    }
}

/// Per-leg combination of an in-the-money weight `w`:
/// `w` (call), `w - 1` (put), `2w - 1` (straddle).
#[inline]
fn leg_weight(option_type: OptionType, w: f64) -> f64 {
    match option_type {
        OptionType::Call => w,
        OptionType::Put => w - 1.0,
        OptionType::Straddle => 2.0 * w - 1.0,
    }
}

/// [`leg_weight`] of `N(d)`, evaluated through `N(-d)` where that avoids
/// cancellation.
#[inline]
fn leg_cdf(option_type: OptionType, d: f64) -> f64 {
    match option_type {
        OptionType::Call => norm_cdf(d),
        OptionType::Put => -norm_cdf(-d),
        OptionType::Straddle => norm_cdf(d) - norm_cdf(-d),
    }
}
