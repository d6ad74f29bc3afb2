//! Row/column range analysis.
//!
//! Extracts one row of a dataset between two column selectors and
//! summarizes the numeric cells in it.

pub mod error;
pub mod service;
pub mod types;


pub use error::RangeError;
pub use service::RangeAnalyzer;
pub use types::{NumericValue, RangeAnalysisResult, RangeCell, RangeStatistics, RowPolicy};
