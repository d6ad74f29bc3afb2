//! Range analysis service.

use tracing::debug;

use super::error::RangeError;
use super::types::{NumericValue, RangeAnalysisResult, RangeCell, RangeStatistics, RowPolicy};
use crate::addressing::{AddressError, ColumnSelector, number_to_letter};
use crate::dataset::TabularDataset;

/// Analyzes a row slice of a dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeAnalyzer {
    policy: RowPolicy,
}

impl RangeAnalyzer {
    /// Creates an analyzer with the given row policy.
    #[must_use]
    pub const fn new(policy: RowPolicy) -> Self {
        Self { policy }
    }

    /// The row policy in effect.
    #[must_use]
    pub const fn policy(&self) -> RowPolicy {
        self.policy
    }

    /// Highest row number `analyze` accepts for this dataset.
    #[must_use]
    pub fn effective_max_row(&self, dataset: &TabularDataset) -> usize {
        self.policy.effective_max_row(dataset)
    }

    /// Checks a requested row number without analyzing anything.
    ///
    /// Interactive callers use this to decide whether to re-prompt.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::RowOutOfRange` if `row` is 0 or above the
    /// effective maximum row.
    pub fn validate_row(&self, dataset: &TabularDataset, row: usize) -> Result<(), RangeError> {
        let max_row = self.effective_max_row(dataset);
        if row < 1 || row > max_row {
            return Err(RangeError::RowOutOfRange { row, max_row });
        }
        Ok(())
    }

    /// Analyzes `row` between the `start` and `end` columns, inclusive.
    ///
    /// # Errors
    ///
    /// - `RangeError::RowOutOfRange` for a row outside `1..=effective_max_row`.
    /// - `RangeError::InvalidAddress` for a malformed selector, a start column
    ///   after the end column, or an end column past the last dataset column.
    pub fn analyze(
        &self,
        dataset: &TabularDataset,
        row: usize,
        start: &ColumnSelector,
        end: &ColumnSelector,
    ) -> Result<RangeAnalysisResult, RangeError> {
        self.validate_row(dataset, row)?;

        let start_column = start.resolve()?;
        let end_column = end.resolve()?;
        if start_column > end_column {
            return Err(AddressError::ReversedRange {
                start: start_column,
                end: end_column,
            }
            .into());
        }
        if end_column > dataset.column_count() {
            return Err(AddressError::ColumnOutOfBounds {
                column: end_column,
                column_count: dataset.column_count(),
            }
            .into());
        }

        let mut row_data = Vec::with_capacity(end_column - start_column + 1);
        for (offset, column) in dataset.columns()[start_column - 1..end_column]
            .iter()
            .enumerate()
        {
            let column_number = start_column + offset;
            row_data.push(RangeCell {
                column_number,
                column_letter: number_to_letter(column_number)?,
                column_name: column.name.clone(),
                value: column.cells[row - 1].clone(),
            });
        }

        let numeric_data: Vec<NumericValue> = row_data
            .iter()
            .filter_map(|cell| {
                cell.value.as_number().map(|value| NumericValue {
                    column_name: cell.column_name.clone(),
                    value,
                })
            })
            .collect();

        let values: Vec<f64> = numeric_data.iter().map(|n| n.value).collect();
        let statistics = RangeStatistics::from_values(&values);

        debug!(
            row,
            start_column,
            end_column,
            cells = row_data.len(),
            numeric = numeric_data.len(),
            "Analyzed row range"
        );

        Ok(RangeAnalysisResult {
            row_number: row,
            start_column,
            end_column,
            row_data,
            numeric_data,
            statistics,
        })
    }

    /// Analyzes every column of `row`.
    ///
    /// # Errors
    ///
    /// Same as [`RangeAnalyzer::analyze`].
    pub fn analyze_row(
        &self,
        dataset: &TabularDataset,
        row: usize,
    ) -> Result<RangeAnalysisResult, RangeError> {
        self.analyze(
            dataset,
            row,
            &ColumnSelector::Number(1),
            &ColumnSelector::Number(dataset.column_count()),
        )
    }
}
