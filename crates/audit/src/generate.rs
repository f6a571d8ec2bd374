//! The column audit generator

use tabular::TabularDataset;

use crate::fingerprint::dataset_fingerprint;
use crate::schema::{AuditReport, ColumnAuditRecord, ColumnRole, VariableClass};

/// Audit every column of `dataset`, in ascending index order.
///
/// Single pass, no hidden state: identical inputs always yield identical
/// records. A dataset with zero columns yields an empty sequence.
pub fn audit_columns(dataset: &TabularDataset) -> Vec<ColumnAuditRecord> {
    let cols = dataset.column_count();
    let rows = dataset.row_count();

    (0..cols)
        .map(|i| {
            let is_label = i == cols - 1;
            ColumnAuditRecord {
                index: i,
                display_name: if is_label {
                    "Label".to_string()
                } else {
                    format!("Feature {i}")
                },
                role: if is_label {
                    ColumnRole::Target
                } else {
                    ColumnRole::Feature
                },
                // feature descriptions are 1-based, display names 0-based
                description: if is_label {
                    "ECG class label".to_string()
                } else {
                    format!("ECG signal feature {}", i + 1)
                },
                available_before_prediction: !is_label,
                detailed_type: dataset.column_type(i),
                missing_percentage: missing_percentage(dataset.missing_in_column(i), rows),
                variable_class: if is_label {
                    VariableClass::Categorical
                } else {
                    VariableClass::Quantitative
                },
            }
        })
        .collect()
}

/// Wrap [`audit_columns`] with the pass-through dataset name, the shape and
/// the content fingerprint.
pub fn audit_dataset(dataset: &TabularDataset, name: &str) -> AuditReport {
    AuditReport {
        dataset: name.to_string(),
        rows: dataset.row_count(),
        columns: dataset.column_count(),
        fingerprint: dataset_fingerprint(dataset),
        records: audit_columns(dataset),
    }
}

fn missing_percentage(missing: usize, rows: usize) -> String {
    // 0 rows would divide by zero; defined as 0.00%
    if rows == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", missing as f64 / rows as f64 * 100.0)
}
