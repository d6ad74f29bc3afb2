//! Forecast data types.

use serde::{Deserialize, Serialize};

use crate::growth::GrowthRateEstimate;

/// Default number of projected periods (one year of months).
pub const DEFAULT_HORIZON: usize = 12;

/// A projected series for one product or column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    /// Product name or column header.
    pub identifier: String,
    /// Value the projection starts from; equals `values[0]`.
    pub current_value: f64,
    /// Growth rate applied per period.
    pub growth: GrowthRateEstimate,
    /// Projected values, one per period.
    pub values: Vec<f64>,
    /// Sum of `values`.
    pub sum: f64,
    /// Mean of `values`.
    pub mean: f64,
}

impl ForecastSeries {
    /// Number of projected periods.
    #[must_use]
    pub fn horizon(&self) -> usize {
        self.values.len()
    }
}
