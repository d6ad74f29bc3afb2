//! In-memory tabular datasets.
//!
//! A `TabularDataset` is produced by an external loader (spreadsheet reader,
//! JSON document) and only ever read by the engine. Cell types are decided
//! once at load time, so numeric checks never re-inspect raw values.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::DatasetError;
pub use types::{Cell, Column, TabularDataset};
