//! Ordinary least squares on log-transformed samples.

/// Slope of `ln(sample)` regressed on the sample index (0, 1, 2, ...).
///
/// Returns `None` when fewer than two samples are given. Samples must be
/// positive; a non-positive sample produces a NaN slope.
#[must_use]
pub fn log_linear_slope(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }

    let n = samples.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let logs: Vec<f64> = samples.iter().map(|s| s.ln()).collect();
    let y_mean = logs.iter().sum::<f64>() / n;

    let (sxy, sxx) = logs
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sxy, sxx), (i, y)| {
            let dx = i as f64 - x_mean;
            (sxy + dx * (y - y_mean), sxx + dx * dx)
        });

    Some(sxy / sxx)
}
