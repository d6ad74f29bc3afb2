//! Growth estimate data types.

use std::fmt;

use serde::{Deserialize, Serialize};
use trendline_shared::GrowthConfig;

use super::error::GrowthError;

/// Where a growth rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthProvenance {
    /// Fitted from historical data.
    Estimated,
    /// Default rate substituted because the fit could not be trusted.
    FallbackDefault,
    /// Supplied by the caller.
    Manual,
}

impl fmt::Display for GrowthProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Estimated => "estimated",
            Self::FallbackDefault => "fallback-default",
            Self::Manual => "manual",
        })
    }
}

/// Why an estimate fell back to the default rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackReason {
    /// Fewer than two samples.
    InsufficientSamples,
    /// A sample was zero, negative or NaN, so its logarithm is undefined.
    NonPositiveSample,
    /// The regression or the supplied rate was not a finite number.
    NonFiniteResult,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InsufficientSamples => "insufficient-samples",
            Self::NonPositiveSample => "non-positive-sample",
            Self::NonFiniteResult => "non-finite-result",
        })
    }
}

/// Clamping interval and fallback value for growth rates, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthBounds {
    /// Lowest reportable rate.
    pub min_rate: f64,
    /// Highest reportable rate.
    pub max_rate: f64,
    /// Rate used on fallback.
    pub fallback_rate: f64,
}

impl GrowthBounds {
    /// Creates bounds, checking that they describe a usable interval.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError` when a value is not finite, `min_rate` exceeds
    /// `max_rate`, or `fallback_rate` lies outside `[min_rate, max_rate]`.
    pub fn new(min_rate: f64, max_rate: f64, fallback_rate: f64) -> Result<Self, GrowthError> {
        if !(min_rate.is_finite() && max_rate.is_finite() && fallback_rate.is_finite()) {
            return Err(GrowthError::NonFiniteBounds {
                min_rate,
                max_rate,
                fallback_rate,
            });
        }
        if min_rate > max_rate {
            return Err(GrowthError::InvertedBounds { min_rate, max_rate });
        }
        if !(min_rate..=max_rate).contains(&fallback_rate) {
            return Err(GrowthError::FallbackOutOfBounds {
                fallback_rate,
                min_rate,
                max_rate,
            });
        }

        Ok(Self {
            min_rate,
            max_rate,
            fallback_rate,
        })
    }

    /// Clamps `rate` into `[min_rate, max_rate]`.
    ///
    /// Never panics, even for bounds built without [`GrowthBounds::new`]:
    /// the upper bound wins when the interval is inverted and NaN bounds are
    /// ignored.
    #[must_use]
    pub fn clamp(&self, rate: f64) -> f64 {
        rate.max(self.min_rate).min(self.max_rate)
    }
}

impl Default for GrowthBounds {
    fn default() -> Self {
        Self {
            min_rate: -20.0,
            max_rate: 50.0,
            fallback_rate: 5.0,
        }
    }
}

impl TryFrom<&GrowthConfig> for GrowthBounds {
    type Error = GrowthError;

    fn try_from(config: &GrowthConfig) -> Result<Self, Self::Error> {
        Self::new(config.min_rate, config.max_rate, config.fallback_rate)
    }
}

/// A per-step growth percentage, always inside the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRateEstimate {
    /// Growth rate in percent (10.0 means +10% per step).
    pub rate: f64,
    /// How the rate was obtained.
    pub provenance: GrowthProvenance,
    /// Set only when `provenance` is `FallbackDefault`.
    pub fallback_reason: Option<FallbackReason>,
}

impl GrowthRateEstimate {
    /// A fitted rate, clamped into bounds.
    #[must_use]
    pub fn estimated(rate: f64, bounds: &GrowthBounds) -> Self {
        Self {
            rate: bounds.clamp(rate),
            provenance: GrowthProvenance::Estimated,
            fallback_reason: None,
        }
    }

    /// The default rate, recording why it was used.
    #[must_use]
    pub fn fallback(reason: FallbackReason, bounds: &GrowthBounds) -> Self {
        Self {
            rate: bounds.fallback_rate,
            provenance: GrowthProvenance::FallbackDefault,
            fallback_reason: Some(reason),
        }
    }

    /// A caller-supplied rate, clamped into bounds.
    ///
    /// A non-finite rate is replaced by the fallback rate.
    #[must_use]
    pub fn manual(rate: f64, bounds: &GrowthBounds) -> Self {
        if !rate.is_finite() {
            return Self::fallback(FallbackReason::NonFiniteResult, bounds);
        }
        Self {
            rate: bounds.clamp(rate),
            provenance: GrowthProvenance::Manual,
            fallback_reason: None,
        }
    }

    /// True when the default rate was substituted.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.provenance == GrowthProvenance::FallbackDefault
    }

    /// Per-step multiplier, `1 + rate / 100`.
    #[must_use]
    pub fn factor(&self) -> f64 {
        1.0 + self.rate / 100.0
    }
}
