//! Dataset error types.

use thiserror::Error;

/// Errors raised while assembling a dataset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// A column does not have the same number of cells as the first column.
    #[error("Column '{column}' has {found} cells, expected {expected}")]
    RaggedColumns {
        /// Offending column name.
        column: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        found: usize,
    },

    /// A row does not have one cell per header.
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// 1-based row number.
        row: usize,
        /// Number of headers.
        expected: usize,
        /// Number of cells in the row.
        found: usize,
    },
}
