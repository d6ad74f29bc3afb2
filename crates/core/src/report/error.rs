//! Report rendering error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by a `ReportRenderer`.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the destination failed.
    #[error("Failed to write report to {path}: {source}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The model could not be encoded in the target format.
    #[error("Failed to encode report: {0}")]
    Encode(String),
}
