//! Property tests for the analytic Black-Scholes engine and implied volatility.

use pricer_core::types::{MarketParams, OptionType};
use pricer_models::analytical::{implied_vol, BlackScholes, ImpliedVolConfig};
use proptest::prelude::*;

fn option_type() -> impl Strategy<Value = OptionType> {
    prop_oneof![
        Just(OptionType::Call),
        Just(OptionType::Put),
        Just(OptionType::Straddle),
    ]
}

fn market(vol: f64, t: f64, s: f64, k: f64, r: f64, q: f64) -> MarketParams {
    MarketParams::new(vol, t, s, k, r, q).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn put_call_parity(
        vol in 0.01_f64..2.0,
        t in 0.01_f64..5.0,
        s in 1.0_f64..500.0,
        k in 1.0_f64..500.0,
        r in -0.05_f64..0.15,
        q in -0.05_f64..0.15,
    ) {
        let p = market(vol, t, s, k, r, q);
        let bs = BlackScholes::new(p).unwrap();
        let lhs = bs.price(OptionType::Call) - bs.price(OptionType::Put);
        let scale = s.max(k);
        prop_assert!((lhs - p.forward_value()).abs() < 1e-10 * scale);
    }

    #[test]
    fn straddle_decomposes(
        vol in -2.0_f64..2.0,
        t in 0.01_f64..5.0,
        s in 1.0_f64..500.0,
        k in 1.0_f64..500.0,
        r in -0.05_f64..0.15,
        q in -0.05_f64..0.15,
    ) {
        let bs = BlackScholes::new(market(vol, t, s, k, r, q)).unwrap();
        let call = bs.greeks(OptionType::Call);
        let put = bs.greeks(OptionType::Put);
        let straddle = bs.greeks(OptionType::Straddle);
        let scale = s.max(k);
        prop_assert!((straddle.price - call.price - put.price).abs() < 1e-9 * scale);
        prop_assert!((straddle.delta - call.delta - put.delta).abs() < 1e-12);
        prop_assert!((straddle.vega - call.vega - put.vega).abs() < 1e-9 * scale);
    }

    #[test]
    fn negative_volatility_reflects_about_intrinsic(
        vol in 0.0_f64..2.0,
        t in 0.0_f64..5.0,
        s in 0.0_f64..500.0,
        k in 0.0_f64..500.0,
        r in -0.05_f64..0.15,
        q in -0.05_f64..0.15,
        option_type in option_type(),
    ) {
        let up = BlackScholes::new(market(vol, t, s, k, r, q)).unwrap();
        let down = BlackScholes::new(market(-vol, t, s, k, r, q)).unwrap();
        let flat = BlackScholes::new(market(0.0, t, s, k, r, q)).unwrap();
        let sum = up.price(option_type) + down.price(option_type);
        let scale = 1.0 + s.max(k);
        prop_assert!((sum - 2.0 * flat.price(option_type)).abs() < 1e-10 * scale);
    }

    #[test]
    fn zero_volatility_is_intrinsic(
        t in 0.0_f64..5.0,
        s in 0.0_f64..500.0,
        k in 0.0_f64..500.0,
        r in -0.05_f64..0.15,
        q in -0.05_f64..0.15,
        option_type in option_type(),
    ) {
        let p = market(0.0, t, s, k, r, q);
        let price = BlackScholes::new(p).unwrap().price(option_type);
        prop_assert!(price.is_finite());
        if s > 0.0 && k > 0.0 {
            prop_assert_eq!(price, p.intrinsic(option_type));
        }
    }

    #[test]
    fn implied_vol_round_trip(
        vol in 0.1_f64..1.5,
        t in 0.25_f64..3.0,
        s in 50.0_f64..150.0,
        moneyness in 0.9_f64..1.1,
        r in -0.02_f64..0.08,
        q in 0.0_f64..0.05,
        option_type in option_type(),
    ) {
        let p = market(vol, t, s, s * moneyness, r, q);
        let premium = BlackScholes::new(p).unwrap().price(option_type);
        let solved = implied_vol(premium, &p, option_type, &ImpliedVolConfig::default()).unwrap();
        prop_assert!((solved - vol).abs() < 1e-6, "solved {} for {}", solved, vol);
    }

    #[test]
    fn implied_vol_round_trip_negative(
        vol in -0.2_f64..-0.1,
        t in 0.5_f64..2.0,
        s in 80.0_f64..120.0,
        option_type in option_type(),
    ) {
        let p = market(vol, t, s, 100.0, 0.02, 0.0);
        let premium = BlackScholes::new(p).unwrap().price(option_type);
        let solved = implied_vol(premium, &p, option_type, &ImpliedVolConfig::default()).unwrap();
        prop_assert!((solved - vol).abs() < 1e-6, "solved {} for {}", solved, vol);
    }
}
