//! Column address error types.

use thiserror::Error;

/// A column selector or range could not be resolved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Column numbers start at 1.
    #[error("Column number must be at least 1")]
    ZeroColumn,

    /// No label was given.
    #[error("Column label is empty")]
    EmptyLabel,

    /// The label contains something other than ASCII letters.
    #[error("Column label '{label}' contains invalid character '{character}'")]
    InvalidCharacter {
        /// The label as supplied.
        label: String,
        /// First offending character.
        character: char,
    },

    /// The label or number does not fit a column index.
    #[error("Column '{0}' is too large")]
    Overflow(String),

    /// Start column resolves after end column.
    #[error("Start column {start} is after end column {end}")]
    ReversedRange {
        /// Resolved start column number.
        start: usize,
        /// Resolved end column number.
        end: usize,
    },

    /// The column does not exist in the dataset.
    #[error("Column {column} is beyond the dataset's {column_count} columns")]
    ColumnOutOfBounds {
        /// Requested column number.
        column: usize,
        /// Number of columns in the dataset.
        column_count: usize,
    },
}
