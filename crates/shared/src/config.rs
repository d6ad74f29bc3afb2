//! Application configuration management.

use serde::Deserialize;

use crate::error::AppError;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Row/column range analysis configuration.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Growth estimation configuration.
    #[serde(default)]
    pub growth: GrowthConfig,
    /// Forecast projection configuration.
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Report metadata configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Range analysis configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Highest row number a range analysis may request.
    #[serde(default = "default_row_cap")]
    pub row_cap: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            row_cap: default_row_cap(),
        }
    }
}

fn default_row_cap() -> usize {
    78
}

/// Growth estimation configuration (all values are percentages).
#[derive(Debug, Clone, Deserialize)]
pub struct GrowthConfig {
    /// Lowest growth rate an estimate may report.
    #[serde(default = "default_min_rate")]
    pub min_rate: f64,
    /// Highest growth rate an estimate may report.
    #[serde(default = "default_max_rate")]
    pub max_rate: f64,
    /// Rate used when the regression cannot be trusted.
    #[serde(default = "default_fallback_rate")]
    pub fallback_rate: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            min_rate: default_min_rate(),
            max_rate: default_max_rate(),
            fallback_rate: default_fallback_rate(),
        }
    }
}

fn default_min_rate() -> f64 {
    -20.0
}

fn default_max_rate() -> f64 {
    50.0
}

fn default_fallback_rate() -> f64 {
    5.0
}

/// Forecast projection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Number of projected periods per series.
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    /// Column-name keywords that mark a column for automatic forecasting.
    #[serde(default = "default_series_keywords")]
    pub series_keywords: Vec<String>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            series_keywords: default_series_keywords(),
        }
    }
}

fn default_horizon() -> usize {
    12
}

fn default_series_keywords() -> Vec<String> {
    vec!["sales".to_string(), "revenue".to_string()]
}

/// Report metadata configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Company or context label printed in report headers.
    #[serde(default)]
    pub company: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TRENDLINE").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Checks the loaded values for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` describing the first violated rule.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.analysis.row_cap == 0 {
            return Err(AppError::Configuration(
                "analysis.row_cap must be at least 1".to_string(),
            ));
        }
        if self.forecast.horizon == 0 {
            return Err(AppError::Configuration(
                "forecast.horizon must be at least 1".to_string(),
            ));
        }

        let growth = &self.growth;
        if !(growth.min_rate.is_finite() && growth.max_rate.is_finite()) {
            return Err(AppError::Configuration(
                "growth bounds must be finite".to_string(),
            ));
        }
        if growth.min_rate > growth.max_rate {
            return Err(AppError::Configuration(format!(
                "growth.min_rate {} is above growth.max_rate {}",
                growth.min_rate, growth.max_rate
            )));
        }
        if !(growth.min_rate..=growth.max_rate).contains(&growth.fallback_rate) {
            return Err(AppError::Configuration(format!(
                "growth.fallback_rate {} is outside [{}, {}]",
                growth.fallback_rate, growth.min_rate, growth.max_rate
            )));
        }

        Ok(())
    }
}
