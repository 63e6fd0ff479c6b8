//! Export module for the expense tracker
//!
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable ledger snapshot with metadata
//! - YAML: the same snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_json, ExportMetadata, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
