use tabular::TabularDataset;

use crate::schema::Hash32;

/// Deterministic dataset fingerprint:
/// - hash "<rows>\n<columns>\n"
/// - then, column by column, each cell as a missing marker or its f64 bits
pub fn dataset_fingerprint(dataset: &TabularDataset) -> Hash32 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(dataset.row_count().to_string().as_bytes());
    hasher.update(b"\n");
    hasher.update(dataset.column_count().to_string().as_bytes());
    hasher.update(b"\n");

    for i in 0..dataset.column_count() {
        for cell in dataset.column(i) {
            match cell {
                Some(v) => {
                    hasher.update(b"v");
                    hasher.update(&v.to_bits().to_le_bytes());
                }
                None => {
                    hasher.update(b"m");
                }
            }
        }
    }
    hasher.finalize().into()
}
