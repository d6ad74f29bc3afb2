//! Forecast error types.

use thiserror::Error;

use crate::growth::GrowthError;

/// Forecast-related errors.
#[derive(Debug, Error, PartialEq)]
pub enum ForecastError {
    /// Projection length must be at least 1.
    #[error("Forecast horizon must be at least 1, got {0}")]
    InvalidHorizon(usize),

    /// No samples to take a current value from.
    #[error("No historical values for '{0}'")]
    EmptyHistory(String),

    /// The configured growth bounds are unusable.
    #[error(transparent)]
    InvalidGrowthBounds(#[from] GrowthError),
}
