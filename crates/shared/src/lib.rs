//! Shared configuration and errors for Trendline.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management (analysis caps, growth bounds, forecast horizon)

pub mod config;
pub mod error;

pub use crate::config::{AnalysisConfig, AppConfig, ForecastConfig, GrowthConfig, ReportConfig};
pub use crate::error::{AppError, AppResult};
