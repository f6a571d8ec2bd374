use std::fmt;

use serde::{Deserialize, Serialize};
use tabular::CellType;

pub type Hash32 = [u8; 32];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnRole {
    Feature,
    Target,
}

impl ColumnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Feature => "Feature",
            ColumnRole::Target => "Target",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableClass {
    Quantitative,
    Categorical,
}

impl VariableClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableClass::Quantitative => "Quantitative",
            VariableClass::Categorical => "Categorical",
        }
    }
}

impl fmt::Display for VariableClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata summary of one dataset column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnAuditRecord {
    pub index: usize,
    pub display_name: String,       // "Feature {index}" or "Label"
    pub role: ColumnRole,
    pub description: String,
    pub available_before_prediction: bool,
    pub detailed_type: CellType,
    pub missing_percentage: String, // two decimals + "%"
    pub variable_class: VariableClass,
}

/// One audit invocation, ready for tabular rendering.
///
/// Purely a function of the input dataset and its pass-through name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub dataset: String,
    pub rows: usize,
    pub columns: usize,
    #[serde(with = "hex", rename = "fingerprint_hex")]
    pub fingerprint: Hash32, // BLAKE3 over shape + cells
    pub records: Vec<ColumnAuditRecord>,
}
