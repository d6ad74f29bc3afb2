//! Range analysis data types.

use serde::{Deserialize, Serialize};
use trendline_shared::AnalysisConfig;

use crate::dataset::{Cell, TabularDataset};

/// Default highest row a range analysis may touch.
pub const DEFAULT_ROW_CAP: usize = 78;

/// Row bound policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPolicy {
    /// Configured cap on the requested row number.
    pub cap: usize,
}

impl RowPolicy {
    /// Creates a policy with the given cap.
    #[must_use]
    pub const fn new(cap: usize) -> Self {
        Self { cap }
    }

    /// Effective maximum row: the smaller of the cap and the dataset's row count.
    #[must_use]
    pub fn effective_max_row(&self, dataset: &TabularDataset) -> usize {
        self.cap.min(dataset.row_count())
    }
}

impl Default for RowPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_CAP)
    }
}

impl From<&AnalysisConfig> for RowPolicy {
    fn from(config: &AnalysisConfig) -> Self {
        Self::new(config.row_cap)
    }
}

/// One extracted cell with its column labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeCell {
    /// 1-based column number.
    pub column_number: usize,
    /// Spreadsheet letter of the column.
    pub column_letter: String,
    /// Column header from the dataset.
    pub column_name: String,
    /// Cell value.
    pub value: Cell,
}

/// A numeric cell from the extracted range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericValue {
    /// Column header from the dataset.
    pub column_name: String,
    /// Numeric value.
    pub value: f64,
}

/// Descriptive statistics over the numeric cells of a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeStatistics {
    /// Number of numeric cells.
    pub count: usize,
    /// Total sum.
    pub sum: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Largest value.
    pub max: f64,
    /// Smallest value.
    pub min: f64,
}

impl RangeStatistics {
    /// Summarizes the values; `None` when there are none.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let sum: f64 = values.iter().sum();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);

        Some(Self {
            count: values.len(),
            sum,
            mean: sum / values.len() as f64,
            max,
            min,
        })
    }
}

/// Result of analyzing one row between two columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeAnalysisResult {
    /// 1-based row that was analyzed.
    pub row_number: usize,
    /// Resolved first column (1-based, inclusive).
    pub start_column: usize,
    /// Resolved last column (1-based, inclusive).
    pub end_column: usize,
    /// Every extracted cell in column order.
    pub row_data: Vec<RangeCell>,
    /// The numeric subset of `row_data`, in column order.
    pub numeric_data: Vec<NumericValue>,
    /// Statistics over `numeric_data`; absent when it is empty.
    pub statistics: Option<RangeStatistics>,
}
