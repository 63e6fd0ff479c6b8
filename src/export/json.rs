//! JSON export
//!
//! Exports the ledger together with summary metadata and a schema version.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::ledger::Ledger;
use crate::models::{Expense, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub metadata: ExportMetadata,

    pub expenses: Vec<Expense>,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Sum of every amount
    pub total: Money,

    /// Earliest expense date (YYYY-MM-DD)
    pub earliest_expense: Option<String>,

    /// Latest expense date (YYYY-MM-DD)
    pub latest_expense: Option<String>,
}

impl LedgerExport {
    /// Snapshot a ledger for export
    pub fn from_ledger(ledger: &Ledger) -> ExpenseResult<Self> {
        let dates = || ledger.iter().map(|e| e.date);
        let day = |d: DateTime<chrono::Local>| d.format("%Y-%m-%d").to_string();

        let metadata = ExportMetadata {
            expense_count: ledger.len(),
            total: ledger.summary()?.total,
            earliest_expense: dates().min().map(day),
            latest_expense: dates().max().map(day),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata,
            expenses: ledger.expenses().to_vec(),
        })
    }
}

/// Export the ledger as JSON
pub fn export_json<W: Write>(ledger: &Ledger, writer: W, pretty: bool) -> ExpenseResult<usize> {
    let export = LedgerExport::from_ledger(ledger)?;

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };
    result.map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(export.metadata.expense_count)
}
