//! Range analysis error types.

use thiserror::Error;

use crate::addressing::AddressError;

/// Range analysis errors. Both kinds abort the request with no partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// Requested row is below 1 or above the effective maximum row.
    #[error("Row {row} is out of range (valid rows: 1-{max_row})")]
    RowOutOfRange {
        /// Requested 1-based row.
        row: usize,
        /// Effective maximum row.
        max_row: usize,
    },

    /// A column selector or the column range is malformed.
    #[error("Invalid column address: {0}")]
    InvalidAddress(#[from] AddressError),
}
