//! Property-based tests for forecast projection.

use proptest::prelude::*;
use trendline_shared::AppConfig;

use super::error::ForecastError;
use super::service::ForecastProjector;
use super::types::DEFAULT_HORIZON;
use crate::dataset::{Cell, Column, TabularDataset};
use crate::growth::{GrowthBounds, GrowthEstimator, GrowthProvenance, GrowthRateEstimate};

fn manual(rate: f64) -> GrowthRateEstimate {
    GrowthRateEstimate::manual(rate, &GrowthBounds::default())
}

fn numbers(values: &[f64]) -> Vec<Cell> {
    values.iter().copied().map(Cell::Number).collect()
}

#[test]
fn test_three_period_projection() {
    let series = ForecastProjector::project("Widgets", 100.0, manual(10.0), 3).unwrap();

    assert_eq!(series.identifier, "Widgets");
    assert_eq!(series.horizon(), 3);
    for (got, want) in series.values.iter().zip([100.0, 110.0, 121.0]) {
        assert!((got - want).abs() < 1e-9);
    }
    assert!((series.sum - 331.0).abs() < 1e-9);
    assert!((series.mean - 331.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_zero_horizon_rejected() {
    assert_eq!(
        ForecastProjector::project("X", 100.0, manual(5.0), 0),
        Err(ForecastError::InvalidHorizon(0))
    );
    assert!(matches!(
        ForecastProjector::new(0, GrowthEstimator::default()),
        Err(ForecastError::InvalidHorizon(0))
    ));
}

#[test]
fn test_default_horizon_is_twelve() {
    let series = ForecastProjector::default()
        .project_manual("Gadgets", 50.0, 0.0)
        .unwrap();

    assert_eq!(series.horizon(), DEFAULT_HORIZON);
    assert!((series.sum - 600.0).abs() < 1e-9);
    assert_eq!(series.growth.provenance, GrowthProvenance::Manual);
}

#[test]
fn test_history_projection_starts_from_last_sample() {
    let series = ForecastProjector::default()
        .project_history("Sales", &[100.0, 110.0, 121.0, 133.1])
        .unwrap();

    assert!((series.current_value - 133.1).abs() < f64::EPSILON);
    assert_eq!(series.values[0].to_bits(), 133.1f64.to_bits());
    assert_eq!(series.growth.provenance, GrowthProvenance::Estimated);
    assert!((series.growth.rate - 10.0).abs() < 0.5);
}

#[test]
fn test_history_with_bad_sample_still_projects_with_fallback() {
    let series = ForecastProjector::default()
        .project_history("Returns", &[100.0, -3.0, 90.0])
        .unwrap();

    assert!(series.growth.is_fallback());
    assert!((series.growth.rate - 5.0).abs() < f64::EPSILON);
    assert_eq!(series.horizon(), DEFAULT_HORIZON);
}

#[test]
fn test_empty_history_rejected() {
    assert_eq!(
        ForecastProjector::default().project_history("Nothing", &[]),
        Err(ForecastError::EmptyHistory("Nothing".into()))
    );
}

#[test]
fn test_dataset_forecast_selects_sales_and_revenue_columns() {
    let dataset = TabularDataset::new(vec![
        Column::new("Month", vec!["Jan".into(), "Feb".into(), "Mar".into()]),
        Column::new("Net Sales", numbers(&[100.0, 110.0, 121.0])),
        Column::new("Headcount", numbers(&[4.0, 5.0, 6.0])),
        Column::new("REVENUE (EU)", numbers(&[200.0, 180.0, 162.0])),
        Column::new("Sales notes", vec!["a".into(), "b".into(), "c".into()]),
    ])
    .unwrap();

    let projector = ForecastProjector::new(6, GrowthEstimator::default()).unwrap();
    let series = projector.forecast_dataset(&dataset).unwrap();

    let ids: Vec<&str> = series.iter().map(|s| s.identifier.as_str()).collect();
    assert_eq!(ids, vec!["Net Sales", "REVENUE (EU)"]);
    assert!(series.iter().all(|s| s.horizon() == 6));
    assert!((series[0].current_value - 121.0).abs() < f64::EPSILON);
    assert!((series[1].growth.rate + 10.0).abs() < 1e-6);
}

#[test]
fn test_dataset_forecast_custom_keywords() {
    let dataset = TabularDataset::new(vec![
        Column::new("Units Shipped", numbers(&[10.0, 11.0])),
        Column::new("Sales", numbers(&[5.0, 6.0])),
    ])
    .unwrap();

    let projector = ForecastProjector::default().with_series_keywords(vec!["UNITS".into()]);
    let series = projector.forecast_dataset(&dataset).unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].identifier, "Units Shipped");
}

#[test]
fn test_projector_from_config() {
    let mut config = AppConfig::default();
    config.forecast.horizon = 4;
    config.growth.max_rate = 8.0;

    let projector = ForecastProjector::from_config(&config).unwrap();
    let series = projector.project_manual("Capped", 10.0, 30.0).unwrap();

    assert_eq!(series.horizon(), 4);
    assert!((series.growth.rate - 8.0).abs() < f64::EPSILON);
}

#[test]
fn test_projector_from_config_rejects_bad_bounds() {
    let mut inverted = AppConfig::default();
    inverted.growth.min_rate = 60.0;
    assert!(matches!(
        ForecastProjector::from_config(&inverted),
        Err(ForecastError::InvalidGrowthBounds(_))
    ));

    let mut nan = AppConfig::default();
    nan.growth.min_rate = f64::NAN;
    assert!(matches!(
        ForecastProjector::from_config(&nan),
        Err(ForecastError::InvalidGrowthBounds(_))
    ));
}

proptest! {
    /// series[0] == current_value, len == horizon, series[i] follows the compound formula
    #[test]
    fn test_compound_growth_formula(
        current in -1.0e6f64..1.0e6,
        rate in -20.0f64..50.0,
        horizon in 1usize..=60,
    ) {
        let series = ForecastProjector::project("P", current, manual(rate), horizon).unwrap();

        prop_assert_eq!(series.values.len(), horizon);
        prop_assert_eq!(series.values[0].to_bits(), current.to_bits());

        let factor = 1.0 + rate / 100.0;
        for (i, value) in series.values.iter().enumerate() {
            let expected = current * factor.powf(i as f64);
            prop_assert!((value - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }

    /// sum and mean are computed over exactly the projected values
    #[test]
    fn test_aggregates_match_values(
        current in 0.0f64..1.0e6,
        rate in -20.0f64..50.0,
        horizon in 1usize..=36,
    ) {
        let series = ForecastProjector::project("P", current, manual(rate), horizon).unwrap();
        let sum: f64 = series.values.iter().sum();

        prop_assert_eq!(series.sum.to_bits(), sum.to_bits());
        prop_assert!((series.mean - sum / horizon as f64).abs() < 1e-9 * sum.abs().max(1.0));
    }

    /// Same input, bit-identical output
    #[test]
    fn test_projection_is_deterministic(
        current in -1.0e6f64..1.0e6,
        rate in -20.0f64..50.0,
    ) {
        let first = ForecastProjector::project("P", current, manual(rate), 12).unwrap();
        let second = ForecastProjector::project("P", current, manual(rate), 12).unwrap();
        prop_assert_eq!(first, second);
    }
}
