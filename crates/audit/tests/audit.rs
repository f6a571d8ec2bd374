use audit::{audit_columns, audit_dataset, ColumnRole, VariableClass};
use tabular::{CellType, TabularDataset};

// [[1, 2, 0], [null, 3, 1]]: columns 0 and 1 are features, column 2 the label
fn sample_dataset() -> TabularDataset {
    TabularDataset::from_rows(vec![
        vec![Some(1.0), Some(2.0), Some(0.0)],
        vec![None, Some(3.0), Some(1.0)],
    ])
    .unwrap()
}

#[test]
fn test_record_count_matches_columns() {
    let ds = sample_dataset();
    assert_eq!(audit_columns(&ds).len(), ds.column_count());
}

#[test]
fn test_last_record_is_target() {
    let records = audit_columns(&sample_dataset());
    assert_eq!(records.last().unwrap().role, ColumnRole::Target);
    for r in &records[..records.len() - 1] {
        assert_eq!(r.role, ColumnRole::Feature);
    }
}

#[test]
fn test_worked_example_fields() {
    let records = audit_columns(&sample_dataset());

    assert_eq!(records[0].display_name, "Feature 0");
    assert_eq!(records[0].description, "ECG signal feature 1");
    assert_eq!(records[0].missing_percentage, "50.00%");
    assert_eq!(records[0].variable_class, VariableClass::Quantitative);
    assert!(records[0].available_before_prediction);
    assert_eq!(records[0].detailed_type, CellType::Float64);

    assert_eq!(records[1].display_name, "Feature 1");
    assert_eq!(records[1].description, "ECG signal feature 2");
    assert_eq!(records[1].missing_percentage, "0.00%");

    let label = &records[2];
    assert_eq!(label.display_name, "Label");
    assert_eq!(label.role, ColumnRole::Target);
    assert_eq!(label.description, "ECG class label");
    assert!(!label.available_before_prediction);
    assert_eq!(label.variable_class, VariableClass::Categorical);
}

#[test]
fn test_missing_percentage_bounds_and_format() {
    let ds = TabularDataset::from_rows(vec![
        vec![None, Some(1.0), Some(0.0)],
        vec![None, None, Some(1.0)],
        vec![None, Some(2.0), Some(0.0)],
    ])
    .unwrap();

    let records = audit_columns(&ds);
    for r in &records {
        let digits = r.missing_percentage.strip_suffix('%').unwrap();
        let pct: f64 = digits.parse().unwrap();
        assert!((0.0..=100.0).contains(&pct));
        let (_, frac) = digits.split_once('.').unwrap();
        assert_eq!(frac.len(), 2);
    }

    assert_eq!(records[0].missing_percentage, "100.00%");
    assert_eq!(records[1].missing_percentage, "33.33%");
    assert_eq!(records[2].missing_percentage, "0.00%");
}

#[test]
fn test_idempotence() {
    let ds = sample_dataset();
    assert_eq!(audit_columns(&ds), audit_columns(&ds));
    assert_eq!(audit_dataset(&ds, "X"), audit_dataset(&ds, "X"));
}

#[test]
fn test_zero_rows_two_columns() {
    let ds = TabularDataset::from_columns(vec![vec![], vec![]]).unwrap();

    let records = audit_columns(&ds);
    assert_eq!(records.len(), 2);
    for r in &records {
        assert_eq!(r.missing_percentage, "0.00%");
    }
    assert_eq!(records[0].role, ColumnRole::Feature);
    assert_eq!(records[1].role, ColumnRole::Target);
}

#[test]
fn test_zero_columns_is_empty_sequence() {
    let ds = TabularDataset::empty();
    assert!(audit_columns(&ds).is_empty());

    let report = audit_dataset(&ds, "Empty");
    assert_eq!(report.columns, 0);
    assert_eq!(report.rows, 0);
    assert!(report.records.is_empty());
}

#[test]
fn test_report_passes_name_through() {
    let report = audit_dataset(&sample_dataset(), "MIT-BIH Train");
    assert_eq!(report.dataset, "MIT-BIH Train");
    assert_eq!(report.rows, 2);
    assert_eq!(report.columns, 3);
    assert_eq!(report.records.len(), 3);
}

#[test]
fn test_report_serialization() {
    let report = audit_dataset(&sample_dataset(), "Train");
    let v = serde_json::to_value(&report).unwrap();

    assert_eq!(v["dataset"], "Train");
    assert_eq!(v["records"][2]["role"], "Target");
    assert_eq!(v["records"][0]["variable_class"], "Quantitative");
    assert_eq!(v["records"][0]["detailed_type"], "float64");
    assert_eq!(v["records"][0]["missing_percentage"], "50.00%");
    assert_eq!(v["fingerprint_hex"].as_str().unwrap().len(), 64);
}
