//! CLI command for viewing the audit history

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print the most recent `limit` audit entries, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> ExpenseResult<()> {
    let entries = storage.audit_log().read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
