//! Report assembly from forecast and range results.

use super::format::{format_amount, format_percent};
use super::types::{ReportMetadata, ReportModel, ReportSection, TIMESTAMP_FORMAT};
use crate::addressing::number_to_letter;
use crate::dataset::Cell;
use crate::forecast::ForecastSeries;
use crate::range::RangeAnalysisResult;

/// Default title for forecast reports.
pub const FORECAST_REPORT_TITLE: &str = "Sales Forecast Report";

/// Default title suffix for range reports.
pub const RANGE_REPORT_TITLE: &str = "Detailed Range Analysis";

/// Section holding generation details.
pub const DETAILS_SECTION: &str = "Report Details";

/// Builds report models. Pure: no I/O, no clock reads.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Builds a forecast report with one section per series, in the given order.
    #[must_use]
    pub fn forecast_report(metadata: ReportMetadata, series: &[ForecastSeries]) -> ReportModel {
        let mut sections = Vec::with_capacity(series.len() + 1);
        sections.push(Self::details_section(&metadata));

        for forecast in series {
            let mut section = ReportSection::new(format!("Product: {}", forecast.identifier))
                .with("Current Value", format_amount(forecast.current_value, 2))
                .with("Growth Rate", format_percent(forecast.growth.rate))
                .with("Growth Source", Self::growth_source(forecast))
                .with("Total Forecast", format_amount(forecast.sum, 0))
                .with("Average Monthly Forecast", format_amount(forecast.mean, 0));

            for (i, value) in forecast.values.iter().enumerate() {
                section.push(format!("Month {}", i + 1), format_amount(*value, 0));
            }
            sections.push(section);
        }

        ReportModel { metadata, sections }
    }

    /// Builds a range report: details, every extracted cell, and numeric
    /// statistics when the range had any numbers.
    #[must_use]
    pub fn range_report(metadata: ReportMetadata, result: &RangeAnalysisResult) -> ReportModel {
        let start = number_to_letter(result.start_column)
            .unwrap_or_else(|_| result.start_column.to_string());
        let end =
            number_to_letter(result.end_column).unwrap_or_else(|_| result.end_column.to_string());

        let details = Self::details_section(&metadata)
            .with("Analysis for Row", result.row_number.to_string())
            .with("Column Range", format!("{start} to {end}"));

        let mut data = ReportSection::new("Selected Range Data");
        for cell in &result.row_data {
            let value = match &cell.value {
                Cell::Number(n) => format_amount(*n, 2),
                other => other.to_string(),
            };
            data.push(cell.column_name.clone(), value);
        }

        let mut sections = vec![details, data];
        if let Some(stats) = &result.statistics {
            sections.push(
                ReportSection::new("Numeric Data Analysis")
                    .with("Total Sum", format_amount(stats.sum, 2))
                    .with("Average Value", format_amount(stats.mean, 2))
                    .with("Maximum Value", format_amount(stats.max, 2))
                    .with("Minimum Value", format_amount(stats.min, 2)),
            );
        }

        ReportModel { metadata, sections }
    }

    fn details_section(metadata: &ReportMetadata) -> ReportSection {
        let mut section = ReportSection::new(DETAILS_SECTION).with(
            "Report Generated",
            metadata.generated_at.format(TIMESTAMP_FORMAT).to_string(),
        );
        if let Some(label) = &metadata.context_label {
            section.push("Company", label.clone());
        }
        section
    }

    fn growth_source(forecast: &ForecastSeries) -> String {
        match forecast.growth.fallback_reason {
            Some(reason) => format!("{} ({reason})", forecast.growth.provenance),
            None => forecast.growth.provenance.to_string(),
        }
    }
}
