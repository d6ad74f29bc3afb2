//! Forward projection of compound growth.
//!
//! Turns a current value and a growth estimate into a fixed-horizon series,
//! either from a caller-supplied rate, from a history, or for every
//! forecastable column of a dataset at once.

pub mod error;
pub mod projection;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ForecastError;
pub use projection::projected_values;
pub use service::ForecastProjector;
pub use types::{DEFAULT_HORIZON, ForecastSeries};
