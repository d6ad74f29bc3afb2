//! Trendline reporter
//!
//! Batch entry point: loads a dataset or manual product list, runs the
//! forecast or range analysis, and renders the report to a file.

mod cli;
mod loader;
mod renderers;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trendline_core::forecast::{ForecastProjector, ForecastSeries};
use trendline_core::range::{RangeAnalyzer, RowPolicy};
use trendline_core::report::builder::{FORECAST_REPORT_TITLE, RANGE_REPORT_TITLE};
use trendline_core::report::{ReportBuilder, ReportMetadata, ReportModel, render_report};
use trendline_shared::{AppConfig, AppError, AppResult};

use crate::cli::{Cli, Command};
use crate::loader::load_dataset;
use crate::renderers::renderer_for;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trendline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(company) = &cli.company {
        config.report.company = Some(company.clone());
    }

    if let Err(err) = config.validate().and_then(|()| run(cli, &config)) {
        error!(code = err.error_code(), error = %err, "Report generation failed");
        std::process::exit(err.exit_code());
    }

    Ok(())
}

fn run(cli: Cli, config: &AppConfig) -> AppResult<()> {
    let company = config.report.company.clone();

    let (report, output) = match cli.command {
        Command::Forecast {
            dataset,
            output,
            horizon,
        } => {
            let dataset = load_dataset(&dataset)?;
            let projector = projector(config, horizon)?;
            let series = projector.forecast_dataset(&dataset)?;
            if series.is_empty() {
                info!(
                    keywords = ?config.forecast.series_keywords,
                    "No numeric column matched the series keywords"
                );
            }
            (forecast_report(company, &series), output)
        }
        Command::Project {
            products,
            output,
            horizon,
        } => {
            let projector = projector(config, horizon)?;
            let series = products
                .iter()
                .map(|p| projector.project_manual(p.name.clone(), p.current_value, p.rate))
                .collect::<Result<Vec<_>, _>>()?;
            (forecast_report(company, &series), output)
        }
        Command::Range {
            dataset,
            row,
            start,
            end,
            output,
        } => {
            let dataset = load_dataset(&dataset)?;
            let analyzer = RangeAnalyzer::new(RowPolicy::from(&config.analysis));
            let result = analyzer.analyze(&dataset, row, &start, &end)?;

            let title = match &company {
                Some(name) => format!("{name} - {RANGE_REPORT_TITLE}"),
                None => RANGE_REPORT_TITLE.to_string(),
            };
            let report = ReportBuilder::range_report(ReportMetadata::now(title, company), &result);
            (report, output)
        }
    };

    write_report(&report, cli.format, &output)
}

fn projector(config: &AppConfig, horizon: Option<usize>) -> AppResult<ForecastProjector> {
    let mut config = config.clone();
    if let Some(horizon) = horizon {
        config.forecast.horizon = horizon;
    }
    Ok(ForecastProjector::from_config(&config)?)
}

fn forecast_report(company: Option<String>, series: &[ForecastSeries]) -> ReportModel {
    ReportBuilder::forecast_report(ReportMetadata::now(FORECAST_REPORT_TITLE, company), series)
}

fn write_report(report: &ReportModel, format: cli::OutputFormat, output: &Path) -> AppResult<()> {
    let renderer = renderer_for(format);
    render_report(renderer.as_ref(), report, output).map_err(AppError::from)
}
