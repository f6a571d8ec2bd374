//! Tabular ECG dataset loading
//!
//! Reads headerless CSV files into positional, equal-length columns of
//! optional numeric cells.

mod dataset;
mod loader;
mod sources;

pub use dataset::{CellType, TabularDataset};
pub use loader::{load_csv, read_dataset};
pub use sources::DatasetKind;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabularError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Malformed input at row {row}: {detail}")]
    MalformedInput { row: usize, detail: String },

    #[error("Column {column} has {found} rows, expected {expected}")]
    ShapeMismatch {
        column: usize,
        expected: usize,
        found: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TabularError>;
