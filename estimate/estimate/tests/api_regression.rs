//! API Regression Tests for the Estimate Crates
//!
//! These tests pin the public API and the reference figures of the
//! estimation workspace. They are organized in 4 tiers:
//!
//! - Tier 1: Foundation (estimate-types, units and value types)
//! - Tier 2: Formulas (estimate-cost calculator and business stages)
//! - Tier 3: Time Estimation (estimate-time heuristic and fallback)
//! - Tier 4: Catalog and Pipeline (estimate-catalog, `CostEstimator`)
//!
//! If any of these tests fail after API changes, it indicates a breaking change
//! that needs a version bump.
//!
//! The dev-dependencies enable `parallel`, so batches here run on rayon.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use estimate::{cost, prelude::*, time, types};

// =============================================================================
// TIER 1: Foundation - Value Types and Units
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn rounding_is_four_decimals() {
        assert!((types::units::round_currency(0.123_449) - 0.1234).abs() < 1e-12);
        assert!((types::units::round_currency(0.123_46) - 0.1235).abs() < 1e-12);
        assert!(types::units::round_currency(f64::INFINITY).is_infinite());
    }

    #[test]
    fn geometry_volume_units() {
        let job = PrintJobGeometry::new(8.0, BoundingBox::new(20.0, 20.0, 20.0));
        assert!((job.volume_mm3() - 8000.0).abs() < f64::EPSILON);
        assert!((job.bounding_box_mm.volume_mm3() - 8000.0).abs() < f64::EPSILON);
        assert!(!job.is_empty());
    }

    #[test]
    fn currency_formatting() {
        let usd = Currency::new("USD", "$", 1.27);
        assert_eq!(usd.format(12.5), "$12.50");
        assert!((usd.convert(100.0) - 127.0).abs() < 1e-9);
        assert_eq!(Currency::default().code, "GBP");
    }

    #[test]
    fn process_defaults() {
        let params = ProcessParameters::default();
        assert!((params.nozzle_diameter - 0.4).abs() < f64::EPSILON);
        assert!((params.layer_height - 0.2).abs() < f64::EPSILON);
        assert!((params.extrusion_width() - 0.48).abs() < 1e-12);
    }
}

// =============================================================================
// TIER 2: Formulas - Cost Calculator and Business Stages
// =============================================================================

mod tier2_formulas {
    use super::*;

    #[test]
    fn cost_calculator_scenarios() {
        assert!((cost::material_cost(10.0, 1.24, 20.0).unwrap() - 0.248).abs() < 1e-3);
        assert!((cost::energy_cost(4.0, 120.0, 0.15).unwrap() - 0.072).abs() < 1e-3);
        assert!((cost::total_cost(0.25, 0.07, 20.0).unwrap() - 0.384).abs() < 1e-3);
    }

    #[test]
    fn depreciation_scenarios() {
        assert_eq!(cost::depreciation(400.0, 2000.0, 10.0).unwrap(), 2.0);
        assert_eq!(cost::depreciation(0.0, 2000.0, 10.0).unwrap(), 0.0);
        assert_eq!(cost::depreciation(400.0, 0.0, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn labour_scenarios() {
        assert_eq!(cost::labour(0.5, 0.5, 10.0).unwrap(), 10.0);
        assert_eq!(cost::labour(0.0, 0.0, 10.0).unwrap(), 0.0);
        assert_eq!(cost::labour(1.0, 2.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn fail_rate_scenarios() {
        assert!((cost::apply_fail_rate(100.0, 10.0).unwrap() - 111.1111).abs() < 1e-4);
        assert_eq!(cost::apply_fail_rate(100.0, 0.0).unwrap(), 100.0);
        assert_eq!(cost::apply_fail_rate(100.0, 100.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn final_price_scenario() {
        let expected = (cost::apply_fail_rate(100.0, 10.0).unwrap() + 10.0) * 1.2;
        assert_eq!(
            cost::final_business_price(100.0, 10.0, 10.0, 20.0).unwrap(),
            expected
        );
    }

    #[test]
    fn negative_input_is_typed_error() {
        let err = cost::material_cost(-10.0, 1.24, 20.0).unwrap_err();
        assert_eq!(err, PricingError::InvalidInput { quantity: "volume_cm3", value: -10.0 });
    }
}

// =============================================================================
// TIER 3: Time Estimation - Heuristic and Fallback
// =============================================================================

mod tier3_time {
    use super::*;

    #[test]
    fn heuristic_reference_cube() {
        let estimate = time::estimate_print_time(8000.0, &ProcessParameters::default()).unwrap();
        assert!((estimate.print_time_hours - 0.288_490_6).abs() < 1e-6);
        assert!((estimate.details.layers - 100.0).abs() < 1e-9);
        assert_eq!(estimate.details.shells, 2);
    }

    #[test]
    fn thick_shells_fail() {
        let params = ProcessParameters::default().with_shell_thickness(4.0);
        assert!(matches!(
            time::estimate_print_time(1000.0, &params),
            Err(EstimationError::NegativeInteriorVolume { .. })
        ));
    }

    #[test]
    fn fallback_is_one_hour() {
        let params = ProcessParameters::default().with_shell_thickness(4.0);
        let estimate = time::estimate_or_fallback(1000.0, &params, &FallbackPolicy::default());
        assert!(estimate.is_fallback());
        assert_eq!(estimate.hours, time::DEFAULT_FALLBACK_HOURS);
    }

    #[test]
    fn throughput_model() {
        let estimate = TimeModel::Throughput(time::DEFAULT_THROUGHPUT_CM3_PER_HOUR)
            .estimate(22.0, &FallbackPolicy::default());
        assert!((estimate.hours - 2.0).abs() < 1e-12);
        assert!(matches!(estimate.source, TimeSource::Throughput { .. }));
    }
}

// =============================================================================
// TIER 4: Catalog and Pipeline
// =============================================================================

mod tier4_pipeline {
    use super::*;

    fn a1_pla() -> CostEstimator {
        Selection::new("PLA", "Bambu Lab", "A1")
            .resolve(builtin_catalog().unwrap())
            .unwrap()
            .with_time_model(TimeModel::Fixed(2.0))
    }

    #[test]
    fn builtin_catalog_contents() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.base_currency(), "GBP");
        assert_eq!(catalog.materials().len(), 10);
        assert!(catalog.makes().any(|make| make == "Prusa Research"));
        assert_eq!(catalog.currencies().len(), 3);

        let pla = catalog.material("PLA").unwrap();
        assert!((pla.density_g_per_cm3 - 1.24).abs() < f64::EPSILON);
    }

    #[test]
    fn bundled_tables_agree() {
        let table = estimate::catalog::PowerTable::legacy().unwrap();
        let report = estimate::catalog::diverging_printers(builtin_catalog().unwrap(), &table);
        assert!(report.is_empty(), "unexpected divergence: {report:?}");
    }

    #[test]
    fn hobby_quote_from_catalog() {
        let job = a1_pla()
            .estimate_job(&PrintJobGeometry::from_volume_cm3(10.0))
            .unwrap();
        let b = &job.breakdown;

        // 0.0124 kg × 25
        assert!((b.material_cost - 0.31).abs() < 1e-12);
        // 0.2 kWh × 0.34
        assert!((b.energy_cost - 0.068).abs() < 1e-12);
        // 599 / 5000 h × 2 h
        assert!((b.depreciation_cost - 0.2396).abs() < 1e-12);
        // round4(0.378 × 1.2) + depreciation
        assert!((b.total_cost - (0.4536 + 0.2396)).abs() < 1e-12);
    }

    #[test]
    fn business_quote_from_catalog() {
        let params = BusinessParams::default()
            .with_hourly_rate(20.0)
            .with_fail_rate_pct(10.0)
            .with_shipping_cost(10.0);
        let job = a1_pla()
            .with_mode(PricingMode::Business(params))
            .estimate_job(&PrintJobGeometry::from_volume_cm3(10.0))
            .unwrap();
        let b = &job.breakdown;

        let base = b.base_cost();
        assert!((b.labour_cost - 10.0).abs() < f64::EPSILON);
        let expected = (cost::apply_fail_rate(base, 10.0).unwrap() + 10.0) * 1.2;
        assert!((b.total_cost - expected).abs() < 1e-12);
    }

    #[test]
    fn quote_in_other_currency() {
        let gbp = a1_pla()
            .estimate_job(&PrintJobGeometry::from_volume_cm3(10.0))
            .unwrap();
        let eur = Selection::new("PLA", "Bambu Lab", "A1")
            .with_currency("EUR")
            .resolve(builtin_catalog().unwrap())
            .unwrap()
            .with_time_model(TimeModel::Fixed(2.0))
            .estimate_job(&PrintJobGeometry::from_volume_cm3(10.0))
            .unwrap();

        assert_eq!(eur.breakdown.currency.symbol, "€");
        assert!((eur.breakdown.total_cost - gbp.breakdown.total_cost * 1.17).abs() < 1e-3);
    }

    #[test]
    fn batch_estimation() {
        let jobs: Vec<_> = [5.0, 10.0, 20.0]
            .into_iter()
            .map(PrintJobGeometry::from_volume_cm3)
            .collect();
        let results = a1_pla().estimate_batch(&jobs);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(Result::is_ok));
    }

    #[test]
    fn batch_matches_single_jobs() {
        let estimator = a1_pla();
        let jobs: Vec<_> = (1..=64)
            .map(|i| PrintJobGeometry::from_volume_cm3(f64::from(i) * 2.5 - 10.0))
            .collect();
        let results = estimator.estimate_batch(&jobs);
        assert_eq!(results.len(), jobs.len());
        for (job, result) in jobs.iter().zip(&results) {
            match (estimator.estimate_job(job), result) {
                (Ok(single), Ok(batched)) => assert_eq!(&single, batched),
                (Err(single), Err(batched)) => assert_eq!(&single, batched),
                (single, batched) => panic!("{job:?}: {single:?} vs {batched:?}"),
            }
        }
    }

    #[test]
    fn shared_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Catalog>();
        assert_send_sync::<CostEstimator>();
        assert_send_sync::<CostBreakdown>();
        assert_send_sync::<TimeEstimate>();
        assert_send_sync::<JobEstimate>();
        assert_send_sync::<PricingError>();
        assert_send_sync::<CatalogLoadError>();
    }

    #[test]
    fn estimate_serializes_to_json() {
        let job = a1_pla()
            .estimate_job(&PrintJobGeometry::from_volume_cm3(10.0))
            .unwrap();
        let json = serde_json::to_string(&job).unwrap();
        assert!(json.contains("\"total_cost\""));
        assert!(json.contains("\"Provided\""));
    }
}
