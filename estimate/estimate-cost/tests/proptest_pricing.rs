//! Property-based tests for the pricing formulas.
//!
//! Run with: cargo test -p estimate-cost -- proptest

use estimate_cost::{
    PricingError, apply_fail_rate, depreciation, energy_cost, final_business_price, labour,
    material_cost, total_cost,
};
use estimate_types::units::round_currency;
use proptest::prelude::*;

/// Slack for comparing two results rounded to 4 decimals.
const ROUNDING_TOLERANCE: f64 = 1e-4;

proptest! {
    #[test]
    fn proptest_material_cost_is_non_negative_and_linear(
        volume in 0.0..2000.0f64,
        density in 0.5..3.0f64,
        cost_per_kg in 0.0..200.0f64,
    ) {
        let single = material_cost(volume, density, cost_per_kg).unwrap();
        let double = material_cost(2.0 * volume, density, cost_per_kg).unwrap();

        prop_assert!(single >= 0.0);
        prop_assert!((single - double / 2.0).abs() <= ROUNDING_TOLERANCE);
    }

    #[test]
    fn proptest_energy_is_zero_without_time_or_power(
        time in 0.0..500.0f64,
        power in 0.0..2000.0f64,
        rate in 0.0..2.0f64,
    ) {
        prop_assert_eq!(energy_cost(0.0, power, rate).unwrap(), 0.0);
        prop_assert_eq!(energy_cost(time, 0.0, rate).unwrap(), 0.0);
    }

    #[test]
    fn proptest_zero_markup_is_rounded_sum(
        material in 0.0..1000.0f64,
        energy in 0.0..1000.0f64,
    ) {
        prop_assert_eq!(total_cost(material, energy, 0.0).unwrap(), round_currency(material + energy));
    }

    #[test]
    fn proptest_zero_lifetime_means_no_depreciation(
        cost in 0.0..10_000.0f64,
        time in 0.0..500.0f64,
    ) {
        prop_assert_eq!(depreciation(cost, 0.0, time).unwrap(), 0.0);
    }

    #[test]
    fn proptest_fail_rate_bounds(base in 0.0..10_000.0f64) {
        prop_assert_eq!(apply_fail_rate(base, 0.0).unwrap(), base);
        prop_assert_eq!(apply_fail_rate(base, 100.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn proptest_fail_rate_is_monotonic(
        base in 0.0..10_000.0f64,
        a in 0.0..100.0f64,
        b in 0.0..100.0f64,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(apply_fail_rate(base, low).unwrap() <= apply_fail_rate(base, high).unwrap());
    }

    #[test]
    fn proptest_final_price_is_exact_composition(
        base in 0.0..10_000.0f64,
        fail in 0.0..=100.0f64,
        shipping in 0.0..100.0f64,
        markup in 0.0..300.0f64,
    ) {
        let composed = (apply_fail_rate(base, fail).unwrap() + shipping) * (1.0 + markup / 100.0);
        prop_assert_eq!(final_business_price(base, fail, shipping, markup).unwrap(), composed);
    }

    #[test]
    fn proptest_negative_inputs_are_rejected(value in -1.0e6..-1.0e-9f64) {
        let is_invalid_input = matches!(
            material_cost(value, 1.24, 20.0),
            Err(PricingError::InvalidInput { .. })
        );
        prop_assert!(is_invalid_input);
        prop_assert!(energy_cost(1.0, value, 0.3).is_err());
        prop_assert!(labour(value, 0.0, 10.0).is_err());
        prop_assert!(apply_fail_rate(100.0, value).is_err());
    }
}
