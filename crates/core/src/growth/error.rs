//! Growth estimation error types.

use thiserror::Error;

/// Rejected growth bounds.
#[derive(Debug, Error, PartialEq)]
pub enum GrowthError {
    /// A bound or the fallback rate is NaN or infinite.
    #[error("Growth bounds must be finite (min {min_rate}, max {max_rate}, fallback {fallback_rate})")]
    NonFiniteBounds {
        /// Lower bound.
        min_rate: f64,
        /// Upper bound.
        max_rate: f64,
        /// Fallback rate.
        fallback_rate: f64,
    },

    /// The lower bound is above the upper bound.
    #[error("Minimum growth rate {min_rate} is above maximum {max_rate}")]
    InvertedBounds {
        /// Lower bound.
        min_rate: f64,
        /// Upper bound.
        max_rate: f64,
    },

    /// The fallback rate lies outside the bounds.
    #[error("Fallback growth rate {fallback_rate} is outside [{min_rate}, {max_rate}]")]
    FallbackOutOfBounds {
        /// Fallback rate.
        fallback_rate: f64,
        /// Lower bound.
        min_rate: f64,
        /// Upper bound.
        max_rate: f64,
    },
}
