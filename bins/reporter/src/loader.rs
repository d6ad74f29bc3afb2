//! JSON dataset loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use trendline_core::dataset::{Column, TabularDataset};
use trendline_shared::{AppError, AppResult};

/// On-disk dataset layout: `{"columns": [{"name": .., "cells": [..]}]}`.
#[derive(Debug, Deserialize)]
struct DatasetDocument {
    columns: Vec<Column>,
}

/// Parses a dataset from JSON text.
///
/// # Errors
///
/// Returns `AppError::Input` for malformed JSON or ragged columns.
pub fn parse_dataset(json: &str) -> AppResult<TabularDataset> {
    let document: DatasetDocument =
        serde_json::from_str(json).map_err(|e| AppError::Input(format!("invalid dataset: {e}")))?;
    Ok(TabularDataset::new(document.columns)?)
}

/// Reads and parses a dataset file.
///
/// # Errors
///
/// Returns `AppError::Input` if the file cannot be read or parsed.
pub fn load_dataset(path: &Path) -> AppResult<TabularDataset> {
    let json = fs::read_to_string(path)
        .map_err(|e| AppError::Input(format!("cannot read {}: {e}", path.display())))?;
    let dataset = parse_dataset(&json)?;

    debug!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "Loaded dataset"
    );
    Ok(dataset)
}
