//! Column selectors as supplied by callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::column::letter_to_number;
use super::error::AddressError;

/// A reference to a column, either by number or by letter label.
///
/// Deserializes from a JSON number or from a string parsed like
/// [`FromStr`], so `"3"` is column 3 and `"c"` is `Letter("C")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawSelector")]
pub enum ColumnSelector {
    /// 1-based column number.
    Number(usize),
    /// Spreadsheet letter label.
    Letter(String),
}

/// Wire shape accepted when deserializing a `ColumnSelector`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelector {
    Number(usize),
    Text(String),
}

impl TryFrom<RawSelector> for ColumnSelector {
    type Error = AddressError;

    fn try_from(raw: RawSelector) -> Result<Self, Self::Error> {
        match raw {
            RawSelector::Number(n) => Ok(Self::Number(n)),
            RawSelector::Text(text) => text.parse(),
        }
    }
}

impl ColumnSelector {
    /// Resolves the selector to its canonical 1-based column number.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` if the number is zero or the label is malformed.
    pub fn resolve(&self) -> Result<usize, AddressError> {
        match self {
            Self::Number(0) => Err(AddressError::ZeroColumn),
            Self::Number(n) => Ok(*n),
            Self::Letter(label) => letter_to_number(label),
        }
    }
}

impl FromStr for ColumnSelector {
    type Err = AddressError;

    /// All-digit input is a column number; anything else is a letter label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AddressError::EmptyLabel);
        }

        if s.chars().all(|c| c.is_ascii_digit()) {
            let number: usize = s
                .parse()
                .map_err(|_| AddressError::Overflow(s.to_string()))?;
            return Ok(Self::Number(number));
        }

        // Validate eagerly so bad input is reported where it was typed
        letter_to_number(s)?;
        Ok(Self::Letter(s.to_ascii_uppercase()))
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Letter(label) => f.write_str(label),
        }
    }
}

impl From<usize> for ColumnSelector {
    fn from(number: usize) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for ColumnSelector {
    fn from(label: &str) -> Self {
        Self::Letter(label.to_string())
    }
}
