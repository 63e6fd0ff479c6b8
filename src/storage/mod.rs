//! Storage layer for the expense tracker
//!
//! Provides the JSON file persistence for the ledger and the audit trail
//! that accompanies every mutation.
//!
//! There is no file locking. Two processes working on the same ledger file
//! at once race, and the last one to save wins. Saves are atomic, so the
//! file itself is never left half-written.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::ledger::Ledger;
use crate::models::Expense;

/// Storage coordinator: knows where the ledger lives and where mutations
/// are logged
#[derive(Debug, Clone)]
pub struct Storage {
    paths: ExpensePaths,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Self {
        Self {
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: settings.audit_enabled,
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// The audit log, readable even when logging new entries is disabled
    pub fn audit_log(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load the ledger from its backing file
    pub fn load_ledger(&self) -> Result<Ledger, ExpenseError> {
        Ledger::load(self.paths.ledger_file())
    }

    /// Save the ledger to its backing file
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<(), ExpenseError> {
        ledger.save(self.paths.ledger_file())
    }

    pub fn log_create(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.log(|| AuditEntry::create(expense))
    }

    pub fn log_update(&self, before: &Expense, after: &Expense) -> Result<(), ExpenseError> {
        self.log(|| AuditEntry::update(before, after))
    }

    pub fn log_delete(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.log(|| AuditEntry::delete(expense))
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) -> Result<(), ExpenseError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&entry())
    }
}
