//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Config directory and ledger file resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{ExpensePaths, DEFAULT_LEDGER_FILE};
pub use settings::Settings;
