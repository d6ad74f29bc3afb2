//! Property-based tests for growth estimation.

use proptest::prelude::*;
use rstest::rstest;

use super::error::GrowthError;
use super::service::GrowthEstimator;
use super::types::{FallbackReason, GrowthBounds, GrowthProvenance, GrowthRateEstimate};

#[test]
fn test_geometric_series_recovers_rate() {
    let estimate = GrowthEstimator::default().estimate(&[100.0, 110.0, 121.0, 133.1]);

    assert_eq!(estimate.provenance, GrowthProvenance::Estimated);
    assert!(estimate.fallback_reason.is_none());
    assert!((estimate.rate - 10.0).abs() < 0.5);
}

#[test]
fn test_declining_series_is_negative() {
    let estimate = GrowthEstimator::default().estimate(&[200.0, 190.0, 180.5, 171.475]);

    assert_eq!(estimate.provenance, GrowthProvenance::Estimated);
    assert!((estimate.rate + 5.0).abs() < 0.01);
}

#[test]
fn test_flat_series_is_zero_growth() {
    let estimate = GrowthEstimator::default().estimate(&[50.0, 50.0, 50.0]);

    assert_eq!(estimate.provenance, GrowthProvenance::Estimated);
    assert!(estimate.rate.abs() < 1e-9);
}

#[rstest]
#[case(vec![], FallbackReason::InsufficientSamples)]
#[case(vec![100.0], FallbackReason::InsufficientSamples)]
#[case(vec![100.0, 0.0, 120.0], FallbackReason::NonPositiveSample)]
#[case(vec![100.0, -5.0], FallbackReason::NonPositiveSample)]
#[case(vec![100.0, f64::NAN, 120.0], FallbackReason::NonPositiveSample)]
#[case(vec![100.0, f64::INFINITY], FallbackReason::NonFiniteResult)]
fn test_untrusted_series_fall_back(#[case] samples: Vec<f64>, #[case] reason: FallbackReason) {
    let estimate = GrowthEstimator::default().estimate(&samples);

    assert_eq!(estimate.provenance, GrowthProvenance::FallbackDefault);
    assert_eq!(estimate.fallback_reason, Some(reason));
    assert!((estimate.rate - 5.0).abs() < f64::EPSILON);
    assert!(estimate.is_fallback());
}

#[test]
fn test_explosive_series_clamped_to_upper_bound() {
    let estimate = GrowthEstimator::default().estimate(&[1.0, 10.0, 100.0, 1000.0]);

    assert_eq!(estimate.provenance, GrowthProvenance::Estimated);
    assert!((estimate.rate - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_collapsing_series_clamped_to_lower_bound() {
    let estimate = GrowthEstimator::default().estimate(&[1000.0, 100.0, 10.0, 1.0]);

    assert!((estimate.rate + 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_overflowing_slope_still_clamped() {
    let estimate = GrowthEstimator::default().estimate(&[1e-300, 1e300]);

    assert_eq!(estimate.provenance, GrowthProvenance::Estimated);
    assert!((estimate.rate - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_custom_bounds() {
    let estimator = GrowthEstimator::new(GrowthBounds::new(-5.0, 8.0, 2.0).unwrap());

    assert!((estimator.estimate(&[100.0, 110.0, 121.0]).rate - 8.0).abs() < f64::EPSILON);
    assert!((estimator.estimate(&[100.0]).rate - 2.0).abs() < f64::EPSILON);
}

#[rstest]
#[case(60.0, 50.0, 55.0)]
#[case(f64::NAN, 50.0, 5.0)]
#[case(-20.0, f64::INFINITY, 5.0)]
#[case(-20.0, 50.0, f64::NAN)]
#[case(-20.0, 50.0, 75.0)]
fn test_unusable_bounds_rejected(#[case] min: f64, #[case] max: f64, #[case] fallback: f64) {
    assert!(GrowthBounds::new(min, max, fallback).is_err());
}

#[test]
fn test_bounds_errors_name_the_violation() {
    assert_eq!(
        GrowthBounds::new(60.0, 50.0, 55.0),
        Err(GrowthError::InvertedBounds {
            min_rate: 60.0,
            max_rate: 50.0,
        })
    );
    assert!(matches!(
        GrowthBounds::new(-20.0, 50.0, 75.0),
        Err(GrowthError::FallbackOutOfBounds { .. })
    ));
}

#[test]
fn test_hand_built_bounds_never_panic() {
    let inverted = GrowthEstimator::new(GrowthBounds {
        min_rate: 60.0,
        max_rate: 50.0,
        fallback_rate: 5.0,
    });
    let estimate = inverted.estimate(&[100.0, 110.0, 121.0]);
    assert!((estimate.rate - 50.0).abs() < f64::EPSILON);

    let nan_floor = GrowthEstimator::new(GrowthBounds {
        min_rate: f64::NAN,
        ..GrowthBounds::default()
    });
    let estimate = nan_floor.estimate(&[100.0, 110.0, 121.0]);
    assert!((estimate.rate - 10.0).abs() < 0.5);
    assert!((nan_floor.manual(-35.0).rate + 35.0).abs() < f64::EPSILON);
}

#[test]
fn test_manual_rate_is_clamped_and_flagged() {
    let estimator = GrowthEstimator::default();

    let manual = estimator.manual(12.5);
    assert_eq!(manual.provenance, GrowthProvenance::Manual);
    assert!((manual.rate - 12.5).abs() < f64::EPSILON);

    assert!((estimator.manual(80.0).rate - 50.0).abs() < f64::EPSILON);
    assert!((estimator.manual(-35.0).rate + 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_non_finite_manual_rate_falls_back() {
    let estimate = GrowthRateEstimate::manual(f64::NAN, &GrowthBounds::default());

    assert_eq!(estimate.provenance, GrowthProvenance::FallbackDefault);
    assert_eq!(estimate.fallback_reason, Some(FallbackReason::NonFiniteResult));
}

#[test]
fn test_provenance_labels() {
    assert_eq!(GrowthProvenance::Estimated.to_string(), "estimated");
    assert_eq!(GrowthProvenance::FallbackDefault.to_string(), "fallback-default");
    assert_eq!(
        serde_json::to_string(&GrowthProvenance::FallbackDefault).unwrap(),
        "\"fallback-default\""
    );
}

proptest! {
    /// Estimates stay inside [-20, 50] for every finite series
    #[test]
    fn test_estimate_always_within_bounds(
        samples in prop::collection::vec(-1.0e12f64..1.0e12, 0..40),
    ) {
        let estimate = GrowthEstimator::default().estimate(&samples);
        prop_assert!(estimate.rate >= -20.0);
        prop_assert!(estimate.rate <= 50.0);
    }

    /// Exact geometric series recover their rate when it lies within bounds
    #[test]
    fn test_geometric_series_round_trip(
        start in 1.0f64..1.0e6,
        rate in -19.0f64..49.0,
        len in 2usize..24,
    ) {
        let factor = 1.0 + rate / 100.0;
        let samples: Vec<f64> = (0..len)
            .map(|i| start * factor.powi(i32::try_from(i).unwrap()))
            .collect();

        let estimate = GrowthEstimator::default().estimate(&samples);
        prop_assert_eq!(estimate.provenance, GrowthProvenance::Estimated);
        prop_assert!((estimate.rate - rate).abs() < 1e-6);
    }

    /// Same input, same output
    #[test]
    fn test_estimate_is_deterministic(
        samples in prop::collection::vec(0.1f64..1.0e6, 0..20),
    ) {
        let estimator = GrowthEstimator::default();
        prop_assert_eq!(estimator.estimate(&samples), estimator.estimate(&samples));
    }
}
