//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! Config directory (settings file):
//! 1. `EXPENSE_TRACKER_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory for `expense-tracker`
//!    (`~/.config/expense-tracker` on Linux)
//!
//! The ledger file is chosen by the caller (flag, environment, settings) and
//! defaults to `.expense_list.json` in the working directory. Its audit log
//! sits next to it.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Ledger file used when nothing else is configured
pub const DEFAULT_LEDGER_FILE: &str = ".expense_list.json";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "EXPENSE_TRACKER_CONFIG_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    config_dir: PathBuf,
    ledger_file: PathBuf,
}

impl ExpensePaths {
    /// Resolve the config directory and use the default ledger file
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_config_dir()?,
        };

        Ok(Self {
            config_dir,
            ledger_file: PathBuf::from(DEFAULT_LEDGER_FILE),
        })
    }

    /// Keep everything under one directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            ledger_file: base_dir.join(DEFAULT_LEDGER_FILE),
            config_dir: base_dir,
        }
    }

    /// Point at a different ledger file
    pub fn with_ledger_file(mut self, ledger_file: impl Into<PathBuf>) -> Self {
        self.ledger_file = ledger_file.into();
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Get the path to the ledger file
    pub fn ledger_file(&self) -> &Path {
        &self.ledger_file
    }

    /// Get the path to the audit log, e.g. `.expense_list.audit.log`
    pub fn audit_log(&self) -> PathBuf {
        let stem = self
            .ledger_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "expenses".to_string());
        self.ledger_file.with_file_name(format!("{}.audit.log", stem))
    }
}

fn resolve_default_config_dir() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine a config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.ledger_file(),
            temp_dir.path().join(".expense_list.json")
        );
    }

    #[test]
    fn test_audit_log_beside_ledger() {
        let paths = ExpensePaths::with_base_dir(PathBuf::from("/tmp/x"))
            .with_ledger_file("/data/home.json");

        assert_eq!(paths.audit_log(), PathBuf::from("/data/home.audit.log"));
    }

    #[test]
    fn test_default_audit_log_name() {
        let paths = ExpensePaths::with_base_dir(PathBuf::from("/tmp/x"));
        assert_eq!(
            paths.audit_log(),
            PathBuf::from("/tmp/x/.expense_list.audit.log")
        );
    }
}
