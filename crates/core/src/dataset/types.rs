//! Dataset value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DatasetError;

/// A single cell value.
///
/// Only `Number` counts as numeric. Text that happens to look like a number
/// stays `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Intrinsically numeric value.
    Number(f64),
    /// Boolean flag.
    Bool(bool),
    /// Free text.
    Text(String),
    /// No value.
    Empty,
}

impl Cell {
    /// Returns true if the cell holds a number.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns the numeric value, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
            Self::Text(text) => f.write_str(text),
            Self::Empty => Ok(()),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column header.
    pub name: String,
    /// Cells from top to bottom.
    pub cells: Vec<Cell>,
}

impl Column {
    /// Creates a column.
    #[must_use]
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// A column is numeric when it is non-empty and every cell is a number.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(Cell::is_numeric)
    }
}

/// Immutable table of named columns with a fixed row count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabularDataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl TabularDataset {
    /// Builds a dataset from columns of equal length.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::RaggedColumns` if any column length differs from
    /// the first column's.
    pub fn new(columns: Vec<Column>) -> Result<Self, DatasetError> {
        let row_count = columns.first().map_or(0, |c| c.cells.len());

        if let Some(bad) = columns.iter().find(|c| c.cells.len() != row_count) {
            return Err(DatasetError::RaggedColumns {
                column: bad.name.clone(),
                expected: row_count,
                found: bad.cells.len(),
            });
        }

        Ok(Self { columns, row_count })
    }

    /// Builds a dataset from a header row and row-major data, the shape a
    /// spreadsheet reader produces.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::RaggedRows` if a row's length differs from the
    /// header count.
    pub fn from_rows<S: Into<String>>(
        headers: Vec<S>,
        rows: Vec<Vec<Cell>>,
    ) -> Result<Self, DatasetError> {
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect();

        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DatasetError::RaggedRows {
                    row: idx + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            for (column, cell) in columns.iter_mut().zip(row) {
                column.cells.push(cell);
            }
        }

        Self::new(columns)
    }

    /// Number of data rows (headers excluded).
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column by 1-based number.
    #[must_use]
    pub fn column(&self, number: usize) -> Option<&Column> {
        number.checked_sub(1).and_then(|idx| self.columns.get(idx))
    }

    /// Cell by 1-based row and column numbers.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        let row_idx = row.checked_sub(1)?;
        self.column(column)?.cells.get(row_idx)
    }

    /// The column's values as a chronological series, if the column is numeric.
    #[must_use]
    pub fn numeric_series(&self, column: usize) -> Option<Vec<f64>> {
        let column = self.column(column)?;
        if !column.is_numeric() {
            return None;
        }
        Some(column.cells.iter().filter_map(Cell::as_number).collect())
    }
}
