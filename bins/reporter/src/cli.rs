//! Command-line interface definition.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use trendline_core::addressing::ColumnSelector;

/// Trendline batch reporter.
#[derive(Debug, Parser)]
#[command(name = "trendline", version, about = "Sales forecasts and row range analysis")]
pub struct Cli {
    /// Output document format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Company label printed in report headers (overrides `report.company`).
    #[arg(long, global = true)]
    pub company: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Report kinds.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Forecast every sales/revenue column of a dataset.
    Forecast {
        /// JSON dataset file.
        #[arg(long)]
        dataset: PathBuf,
        /// Report destination.
        #[arg(long)]
        output: PathBuf,
        /// Projection length (overrides `forecast.horizon`).
        #[arg(long)]
        horizon: Option<usize>,
    },

    /// Project products with a known current value and growth rate.
    Project {
        /// `NAME:CURRENT:RATE`, e.g. `Widgets:1000:7.5`. Repeatable.
        #[arg(long = "product", required = true)]
        products: Vec<ProductArg>,
        /// Report destination.
        #[arg(long)]
        output: PathBuf,
        /// Projection length (overrides `forecast.horizon`).
        #[arg(long)]
        horizon: Option<usize>,
    },

    /// Analyze a row between two columns.
    Range {
        /// JSON dataset file.
        #[arg(long)]
        dataset: PathBuf,
        /// 1-based row number.
        #[arg(long)]
        row: usize,
        /// First column, as a letter (`A`) or number (`1`).
        #[arg(long, value_parser = ColumnSelector::from_str)]
        start: ColumnSelector,
        /// Last column, as a letter or number.
        #[arg(long, value_parser = ColumnSelector::from_str)]
        end: ColumnSelector,
        /// Report destination.
        #[arg(long)]
        output: PathBuf,
    },
}

/// Renderer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON report model.
    Json,
    /// Plain-text report.
    Text,
}

/// A manually specified product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductArg {
    /// Product name.
    pub name: String,
    /// Current monthly value.
    pub current_value: f64,
    /// Growth rate in percent.
    pub rate: f64,
}

impl FromStr for ProductArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split from the right so product names may contain ':'.
        let mut parts = s.rsplitn(3, ':');
        let (Some(rate), Some(current), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected NAME:CURRENT:RATE, got '{s}'"));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err("product name must not be empty".to_string());
        }
        let current_value = current
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid current value '{current}': {e}"))?;
        let rate = rate
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|e| format!("invalid growth rate '{rate}': {e}"))?;

        Ok(Self {
            name: name.to_string(),
            current_value,
            rate,
        })
    }
}
