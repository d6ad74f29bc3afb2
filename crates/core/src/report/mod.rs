//! Report model assembly.
//!
//! Forecast and range results are flattened into a `ReportModel`: titled
//! sections of (key, formatted value) pairs. The model is the only thing a
//! document renderer ever sees.

pub mod builder;
pub mod error;
pub mod format;
pub mod render;
pub mod types;


pub use builder::ReportBuilder;
pub use error::RenderError;
pub use render::{ReportRenderer, render_report};
pub use types::{ReportEntry, ReportMetadata, ReportModel, ReportSection};
