//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::describe_changes;
use crate::models::{Expense, ExpenseId};

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of an expense with the record as it was before
/// and after the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub expense_id: ExpenseId,

    /// Description of the expense at the time of the operation
    pub description: String,

    /// The expense before the operation (updates and deletes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Expense>,

    /// The expense after the operation (creates and updates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Expense>,

    /// Human-readable diff summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Entry for a newly added expense
    pub fn create(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            expense_id: expense.id,
            description: expense.description.clone(),
            before: None,
            after: Some(expense.clone()),
            diff_summary: None,
        }
    }

    /// Entry for an updated expense, with the changed fields summarized
    pub fn update(before: &Expense, after: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            expense_id: after.id,
            description: after.description.clone(),
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary: describe_changes(before, after),
        }
    }

    /// Entry for a deleted expense
    pub fn delete(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            expense_id: expense.id,
            description: expense.description.clone(),
            before: Some(expense.clone()),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Expense {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id,
            self.description
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
