//! Tests for dataset construction and typed access.

use super::error::DatasetError;
use super::types::{Cell, Column, TabularDataset};

fn sample() -> TabularDataset {
    TabularDataset::from_rows(
        vec!["Month", "Sales", "Notes"],
        vec![
            vec!["Jan".into(), 100.0.into(), Cell::Empty],
            vec!["Feb".into(), 110.0.into(), "promo".into()],
        ],
    )
    .unwrap()
}

#[test]
fn test_from_rows_transposes_into_columns() {
    let dataset = sample();
    assert_eq!(dataset.row_count(), 2);
    assert_eq!(dataset.column_count(), 3);
    assert_eq!(dataset.column(2).unwrap().name, "Sales");
    assert_eq!(dataset.cell(2, 3), Some(&Cell::Text("promo".into())));
}

#[test]
fn test_one_based_access_rejects_zero() {
    let dataset = sample();
    assert!(dataset.column(0).is_none());
    assert!(dataset.cell(0, 1).is_none());
    assert!(dataset.cell(1, 0).is_none());
    assert!(dataset.cell(3, 1).is_none());
}

#[test]
fn test_numeric_series_only_for_numeric_columns() {
    let dataset = sample();
    assert_eq!(dataset.numeric_series(2), Some(vec![100.0, 110.0]));
    assert_eq!(dataset.numeric_series(1), None);
    assert_eq!(dataset.numeric_series(3), None);
}

#[test]
fn test_numeric_looking_text_is_not_numeric() {
    let column = Column::new("Units", vec!["42".into(), 7.0.into()]);
    assert!(!column.is_numeric());
    assert!(!Cell::Text("42".into()).is_numeric());
}

#[test]
fn test_ragged_columns_rejected() {
    let err = TabularDataset::new(vec![
        Column::new("A", vec![1.0.into(), 2.0.into()]),
        Column::new("B", vec![1.0.into()]),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        DatasetError::RaggedColumns {
            column: "B".into(),
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn test_ragged_rows_rejected() {
    let err = TabularDataset::from_rows(
        vec!["A", "B"],
        vec![vec![1.0.into(), 2.0.into()], vec![3.0.into()]],
    )
    .unwrap_err();

    assert_eq!(
        err,
        DatasetError::RaggedRows {
            row: 2,
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn test_cells_deserialize_from_json_values() {
    let column: Column =
        serde_json::from_str(r#"{"name":"Mixed","cells":[1.5,"note",null,true]}"#).unwrap();

    assert_eq!(
        column.cells,
        vec![
            Cell::Number(1.5),
            Cell::Text("note".into()),
            Cell::Empty,
            Cell::Bool(true),
        ]
    );
}

#[test]
fn test_empty_dataset_has_no_rows() {
    let dataset = TabularDataset::new(Vec::new()).unwrap();
    assert_eq!(dataset.row_count(), 0);
    assert_eq!(dataset.column_count(), 0);
}
