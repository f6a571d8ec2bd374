//! Core tabular structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Result, TabularError};

/// In-memory table of equal-length columns with positional column identity.
///
/// The rightmost column is the label/target column by convention; every
/// other column is a feature column. `None` is a missing cell.
#[derive(Clone, Debug, PartialEq)]
pub struct TabularDataset {
    columns: Vec<Vec<Option<f64>>>,
    rows: usize,
}

impl TabularDataset {
    /// Zero columns, zero rows. Degenerate but valid.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: 0,
        }
    }

    pub fn from_columns(columns: Vec<Vec<Option<f64>>>) -> Result<Self> {
        let rows = columns.first().map(|c| c.len()).unwrap_or(0);
        for (i, col) in columns.iter().enumerate() {
            if col.len() != rows {
                return Err(TabularError::ShapeMismatch {
                    column: i,
                    expected: rows,
                    found: col.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Row-major convenience constructor. The first row fixes the width.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<Self> {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut columns = vec![Vec::with_capacity(rows.len()); width];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TabularError::MalformedInput {
                    row: i + 1,
                    detail: format!("expected {} fields, found {}", width, row.len()),
                });
            }
            for (c, cell) in row.iter().enumerate() {
                columns[c].push(*cell);
            }
        }
        Ok(Self {
            columns,
            rows: rows.len(),
        })
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column(&self, index: usize) -> &[Option<f64>] {
        &self.columns[index]
    }

    pub fn missing_in_column(&self, index: usize) -> usize {
        self.columns[index].iter().filter(|c| c.is_none()).count()
    }

    /// Storage type inferred across all of the column's values: any missing
    /// cell forces `float64`; otherwise `int64` iff every value is finite
    /// with no fractional part.
    pub fn column_type(&self, index: usize) -> CellType {
        let col = &self.columns[index];
        let mut all_integral = !col.is_empty();
        for cell in col {
            match cell {
                None => return CellType::Float64,
                Some(v) => {
                    if !(v.is_finite() && v.fract() == 0.0) {
                        all_integral = false;
                    }
                }
            }
        }
        if all_integral {
            CellType::Int64
        } else {
            CellType::Float64
        }
    }
}

/// Per-column storage type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Float64,
    Int64,
}

impl CellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Float64 => "float64",
            CellType::Int64 => "int64",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
