//! Growth-rate estimation service.

use tracing::debug;

use super::regression::log_linear_slope;
use super::types::{FallbackReason, GrowthBounds, GrowthRateEstimate};

/// Estimates compound growth rates from historical series.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowthEstimator {
    bounds: GrowthBounds,
}

impl GrowthEstimator {
    /// Creates an estimator with the given bounds.
    #[must_use]
    pub const fn new(bounds: GrowthBounds) -> Self {
        Self { bounds }
    }

    /// The bounds in effect.
    #[must_use]
    pub const fn bounds(&self) -> &GrowthBounds {
        &self.bounds
    }

    /// Fits a per-step growth percentage to a chronological series.
    ///
    /// `rate = (exp(slope) - 1) * 100`, where `slope` comes from a log-linear
    /// least-squares fit, clamped into bounds. Series that are too short,
    /// contain a non-positive sample, or produce a non-finite slope yield the
    /// fallback rate instead.
    #[must_use]
    pub fn estimate(&self, samples: &[f64]) -> GrowthRateEstimate {
        if samples.len() < 2 {
            return self.fallback(FallbackReason::InsufficientSamples, samples.len());
        }
        if samples.iter().any(|s| s.is_nan() || *s <= 0.0) {
            return self.fallback(FallbackReason::NonPositiveSample, samples.len());
        }

        let Some(slope) = log_linear_slope(samples).filter(|s| s.is_finite()) else {
            return self.fallback(FallbackReason::NonFiniteResult, samples.len());
        };

        // exp() may overflow to +inf; clamping still bounds it
        let rate = (slope.exp() - 1.0) * 100.0;
        if rate.is_nan() {
            return self.fallback(FallbackReason::NonFiniteResult, samples.len());
        }

        GrowthRateEstimate::estimated(rate, &self.bounds)
    }

    /// Wraps a caller-supplied rate in an estimate with `manual` provenance.
    #[must_use]
    pub fn manual(&self, rate: f64) -> GrowthRateEstimate {
        GrowthRateEstimate::manual(rate, &self.bounds)
    }

    fn fallback(&self, reason: FallbackReason, samples: usize) -> GrowthRateEstimate {
        debug!(
            %reason,
            samples,
            rate = self.bounds.fallback_rate,
            "Growth estimation fell back to default rate"
        );
        GrowthRateEstimate::fallback(reason, &self.bounds)
    }
}
