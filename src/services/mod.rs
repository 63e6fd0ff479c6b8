//! Business logic layer
//!
//! Services sit between the CLI handlers and the ledger/storage layers and
//! make sure every mutation is saved and audited.

pub mod expense;

pub use expense::{ExpenseService, UpdateOutcome};
