//! Column audit generation for tabular ECG datasets
//!
//! A pure transform from a loaded dataset into per-column metadata records
//! (name, role, type, missing percentage, classification).

pub mod fingerprint;
pub mod generate;
pub mod schema;

pub use fingerprint::*;
pub use generate::*;
pub use schema::*;
