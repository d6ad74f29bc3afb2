//! Core forecasting and range-analysis logic for Trendline.
//!
//! This crate contains pure computation with ZERO dialog, spreadsheet-reading
//! or document-rendering dependencies. Loaders hand it a `TabularDataset`;
//! renderers receive a `ReportModel` through the `ReportRenderer` seam.
//!
//! # Modules
//!
//! - `dataset` - Typed, immutable tabular data
//! - `addressing` - Column numbers and spreadsheet letter labels
//! - `range` - Row/column range extraction and descriptive statistics
//! - `growth` - Log-linear compound growth estimation with fallback
//! - `forecast` - Fixed-horizon compound growth projection
//! - `report` - Renderer-facing report model

pub mod addressing;
pub mod dataset;
pub mod error;
pub mod forecast;
pub mod growth;
pub mod range;
pub mod report;
