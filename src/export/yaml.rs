//! YAML export
//!
//! Same document as the JSON export, behind a short comment header.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::LedgerExport;
use crate::ledger::Ledger;

/// Export the ledger to YAML format
pub fn export_yaml<W: Write>(ledger: &Ledger, mut writer: W) -> ExpenseResult<usize> {
    let export = LedgerExport::from_ledger(ledger)?;
    let err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense ledger export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(&mut writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(export.metadata.expense_count)
}
