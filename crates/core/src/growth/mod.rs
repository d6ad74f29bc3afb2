//! Compound growth-rate estimation.
//!
//! Fits a straight line to the natural log of a chronological series and
//! reads the per-step growth percentage off the slope. Untrustworthy input
//! never raises; it yields a fallback estimate whose provenance says why.

pub mod error;
pub mod regression;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::GrowthError;
pub use regression::log_linear_slope;
pub use service::GrowthEstimator;
pub use types::{FallbackReason, GrowthBounds, GrowthProvenance, GrowthRateEstimate};
