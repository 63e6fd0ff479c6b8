//! expense-tracker - a small command-line expense ledger
//!
//! Expenses live in a single JSON file (`.expense_list.json` by default).
//! Each command loads the file, applies one operation and, when the ledger
//! changed, writes it back.
//!
//! # Architecture
//!
//! - `models`: `Expense`, `ExpenseId`, `Money` and `MonthFilter`
//! - `ledger`: the in-memory ledger and its add/update/delete/list/summary operations
//! - `storage`: JSON persistence with atomic writes
//! - `services`: mutations that persist and record themselves in the audit log
//! - `audit`: append-only JSONL audit log
//! - `export`: CSV, JSON and YAML export
//! - `config`: paths and user settings
//! - `cli`: command handlers used by the binary
//! - `error`: custom error types
//!
//! # Concurrency
//!
//! There is no file locking. Two processes writing the same ledger race and
//! the last save wins. Each save replaces the file atomically, so a reader
//! never sees a half-written ledger.
//!
//! # Example
//!
//! ```
//! use expense_tracker::ledger::Ledger;
//! use expense_tracker::models::Money;
//!
//! let mut ledger = Ledger::new();
//! ledger.add("Lunch", Money::from_cents(2000))?;
//! ledger.add("Dinner", Money::from_cents(1000))?;
//!
//! assert_eq!(ledger.summary()?.to_string(), "Total expenses: $30.00");
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
