//! File renderers shipped with the reporter.

use std::fs;
use std::path::Path;

use trendline_core::report::{RenderError, ReportModel, ReportRenderer};

use crate::cli::OutputFormat;

/// Writes the report model as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &ReportModel, destination: &Path) -> Result<(), RenderError> {
        let body =
            serde_json::to_string_pretty(report).map_err(|e| RenderError::Encode(e.to_string()))?;
        write_file(destination, &body)
    }
}

/// Writes the plain-text layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn format_name(&self) -> &'static str {
        "text"
    }

    fn render(&self, report: &ReportModel, destination: &Path) -> Result<(), RenderError> {
        write_file(destination, &report.to_plain_text())
    }
}

/// Picks the renderer for `format`.
#[must_use]
pub fn renderer_for(format: OutputFormat) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Text => Box::new(TextRenderer),
    }
}

fn write_file(destination: &Path, body: &str) -> Result<(), RenderError> {
    fs::write(destination, body).map_err(|source| RenderError::Io {
        path: destination.to_path_buf(),
        source,
    })
}
