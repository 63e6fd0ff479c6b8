//! CSV export
//!
//! One row per expense, spreadsheet-friendly: RFC 3339 dates and amounts
//! with exactly two decimals.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::ledger::Ledger;

/// Export all expenses to CSV, returning the number of rows written
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: W) -> ExpenseResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "date", "description", "amount"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in ledger {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.to_rfc3339(),
                expense.description.clone(),
                format!("{:.2}", expense.amount.to_decimal()),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(ledger.len())
}
