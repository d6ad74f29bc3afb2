//! Compound growth projection.

use super::error::ForecastError;

/// `current_value * (1 + rate / 100)^i` for `i` in `0..horizon`.
///
/// # Errors
///
/// Returns `ForecastError::InvalidHorizon` when `horizon` is 0.
pub fn projected_values(
    current_value: f64,
    rate: f64,
    horizon: usize,
) -> Result<Vec<f64>, ForecastError> {
    if horizon == 0 {
        return Err(ForecastError::InvalidHorizon(horizon));
    }

    let factor = 1.0 + rate / 100.0;
    Ok((0..horizon)
        .map(|i| current_value * factor.powf(i as f64))
        .collect())
}
