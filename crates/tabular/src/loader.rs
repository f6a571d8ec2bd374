//! Headerless CSV loading

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::{Result, TabularDataset, TabularError};

/// Load a headerless CSV file into a [`TabularDataset`].
///
/// The first row fixes the column count; a row with a different field count
/// fails the whole load. Empty cells and literal NaN are missing.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<TabularDataset> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TabularError::ResourceNotFound(path.display().to_string()));
    }
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TabularError::ResourceNotFound(path.display().to_string()),
        _ => TabularError::Io(e),
    })?;
    read_dataset(BufReader::new(file))
}

/// Read a headerless CSV stream into a [`TabularDataset`].
///
/// Same contract as [`load_csv`]; an empty stream yields the degenerate
/// empty dataset. Never returns a partially populated dataset.
pub fn read_dataset<R: Read>(reader: R) -> Result<TabularDataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut columns: Vec<Vec<Option<f64>>> = Vec::new();
    let mut rows = 0usize;

    for (i, result) in rdr.records().enumerate() {
        let row_no = i + 1;
        let record = result.map_err(|e| TabularError::MalformedInput {
            row: row_no,
            detail: format!("CSV parse error: {e}"),
        })?;

        if rows == 0 {
            columns = vec![Vec::new(); record.len()];
        } else if record.len() != columns.len() {
            return Err(TabularError::MalformedInput {
                row: row_no,
                detail: format!("expected {} fields, found {}", columns.len(), record.len()),
            });
        }

        for (c, field) in record.iter().enumerate() {
            columns[c].push(parse_cell(field, row_no, c)?);
        }
        rows += 1;
    }

    if rows == 0 {
        return Ok(TabularDataset::empty());
    }
    TabularDataset::from_columns(columns)
}

fn parse_cell(field: &str, row: usize, col: usize) -> Result<Option<f64>> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_nan() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(_) => Err(TabularError::MalformedInput {
            row,
            detail: format!("field {col} is not numeric: {trimmed:?}"),
        }),
    }
}
