//! The boundary to document renderers.

use std::path::Path;

use tracing::{error, info};

use super::error::RenderError;
use super::types::ReportModel;

/// Turns a report model into a document at `destination`.
///
/// Implementations know nothing about datasets, estimators or projectors.
pub trait ReportRenderer {
    /// Short format name for logs (e.g. "json").
    fn format_name(&self) -> &'static str;

    /// Writes the report.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the document could not be produced.
    fn render(&self, report: &ReportModel, destination: &Path) -> Result<(), RenderError>;
}

/// Renders `report` and logs the outcome.
///
/// The report is borrowed, so a failure leaves the computed results intact
/// for the caller to retry or hand to another renderer.
///
/// # Errors
///
/// Returns the renderer's `RenderError`.
pub fn render_report<R: ReportRenderer + ?Sized>(
    renderer: &R,
    report: &ReportModel,
    destination: &Path,
) -> Result<(), RenderError> {
    match renderer.render(report, destination) {
        Ok(()) => {
            info!(
                format = renderer.format_name(),
                destination = %destination.display(),
                sections = report.sections.len(),
                "Report rendered"
            );
            Ok(())
        }
        Err(e) => {
            error!(
                format = renderer.format_name(),
                destination = %destination.display(),
                error = %e,
                "Report rendering failed"
            );
            Err(e)
        }
    }
}
