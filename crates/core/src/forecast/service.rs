//! Forecast projection service.

use rayon::prelude::*;
use tracing::info;
use trendline_shared::AppConfig;

use super::error::ForecastError;
use super::projection::projected_values;
use super::types::{DEFAULT_HORIZON, ForecastSeries};
use crate::dataset::{Cell, Column, TabularDataset};
use crate::growth::{GrowthBounds, GrowthEstimator, GrowthRateEstimate};

/// Projects current values forward over a fixed horizon.
#[derive(Debug, Clone)]
pub struct ForecastProjector {
    horizon: usize,
    estimator: GrowthEstimator,
    series_keywords: Vec<String>,
}

impl ForecastProjector {
    /// Creates a projector.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidHorizon` when `horizon` is 0.
    pub fn new(horizon: usize, estimator: GrowthEstimator) -> Result<Self, ForecastError> {
        if horizon == 0 {
            return Err(ForecastError::InvalidHorizon(horizon));
        }
        Ok(Self {
            horizon,
            estimator,
            series_keywords: default_series_keywords(),
        })
    }

    /// Builds a projector from the `forecast` and `growth` config sections.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidHorizon` when the configured horizon is 0
    /// and `ForecastError::InvalidGrowthBounds` for unusable growth bounds.
    pub fn from_config(config: &AppConfig) -> Result<Self, ForecastError> {
        let estimator = GrowthEstimator::new(GrowthBounds::try_from(&config.growth)?);
        Ok(Self::new(config.forecast.horizon, estimator)?
            .with_series_keywords(config.forecast.series_keywords.clone()))
    }

    /// Replaces the column-name keywords used by [`Self::forecast_dataset`].
    #[must_use]
    pub fn with_series_keywords(mut self, keywords: Vec<String>) -> Self {
        self.series_keywords = keywords
            .into_iter()
            .map(|k| k.to_lowercase())
            .collect();
        self
    }

    /// Projection length.
    #[must_use]
    pub const fn horizon(&self) -> usize {
        self.horizon
    }

    /// The growth estimator used for histories.
    #[must_use]
    pub const fn estimator(&self) -> &GrowthEstimator {
        &self.estimator
    }

    /// Projects `current_value` with `growth` over `horizon` periods.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidHorizon` when `horizon` is 0.
    pub fn project(
        identifier: impl Into<String>,
        current_value: f64,
        growth: GrowthRateEstimate,
        horizon: usize,
    ) -> Result<ForecastSeries, ForecastError> {
        let values = projected_values(current_value, growth.rate, horizon)?;
        let sum: f64 = values.iter().sum();
        let mean = sum / values.len() as f64;

        Ok(ForecastSeries {
            identifier: identifier.into(),
            current_value,
            growth,
            values,
            sum,
            mean,
        })
    }

    /// Projects with a caller-supplied growth rate (percent).
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidHorizon` when the horizon is 0.
    pub fn project_manual(
        &self,
        identifier: impl Into<String>,
        current_value: f64,
        rate: f64,
    ) -> Result<ForecastSeries, ForecastError> {
        Self::project(
            identifier,
            current_value,
            self.estimator.manual(rate),
            self.horizon,
        )
    }

    /// Projects from a chronological history: the last sample is the current
    /// value and the growth rate is estimated from the whole history.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::EmptyHistory` for an empty history.
    pub fn project_history(
        &self,
        identifier: impl Into<String>,
        history: &[f64],
    ) -> Result<ForecastSeries, ForecastError> {
        let identifier = identifier.into();
        let Some(&current_value) = history.last() else {
            return Err(ForecastError::EmptyHistory(identifier));
        };

        let growth = self.estimator.estimate(history);
        Self::project(identifier, current_value, growth, self.horizon)
    }

    /// Forecasts every numeric column whose name contains one of the series
    /// keywords (case-insensitive). Columns are independent and projected in
    /// parallel; the result keeps dataset column order.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::project_history`].
    pub fn forecast_dataset(
        &self,
        dataset: &TabularDataset,
    ) -> Result<Vec<ForecastSeries>, ForecastError> {
        let series = dataset
            .columns()
            .par_iter()
            .filter(|column| self.is_forecastable(column))
            .map(|column| {
                let history: Vec<f64> = column.cells.iter().filter_map(Cell::as_number).collect();
                self.project_history(column.name.clone(), &history)
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            columns = dataset.column_count(),
            series = series.len(),
            fallbacks = series.iter().filter(|s| s.growth.is_fallback()).count(),
            horizon = self.horizon,
            "Generated dataset forecast"
        );

        Ok(series)
    }

    fn is_forecastable(&self, column: &Column) -> bool {
        if !column.is_numeric() {
            return false;
        }
        let name = column.name.to_lowercase();
        self.series_keywords.iter().any(|k| name.contains(k.as_str()))
    }
}

impl Default for ForecastProjector {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            estimator: GrowthEstimator::default(),
            series_keywords: default_series_keywords(),
        }
    }
}

fn default_series_keywords() -> Vec<String> {
    vec!["sales".to_string(), "revenue".to_string()]
}
