//! CLI command handlers
//!
//! Bridges the clap argument parsing with the ledger and service layer.

pub mod expense;
pub mod export;
pub mod history;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::handle_history_command;
