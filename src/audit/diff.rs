//! Diff generation for audit logging
//!
//! Summarizes which user-facing fields of an expense changed. The timestamp
//! is left out: it moves on every real change anyway.

use crate::models::Expense;

/// Longest description shown verbatim in a diff
const MAX_SHOWN_LEN: usize = 50;

/// Describe the field changes between two versions of an expense
///
/// Returns `None` when description and amount are identical.
pub fn describe_changes(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();

    if before.description != after.description {
        changes.push(format!(
            "description: {} -> {}",
            quote(&before.description),
            quote(&after.description)
        ));
    }

    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote a description, truncating long ones
fn quote(s: &str) -> String {
    if s.chars().count() > MAX_SHOWN_LEN {
        let head: String = s.chars().take(MAX_SHOWN_LEN - 3).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};

    fn expense(description: &str, cents: i64) -> Expense {
        Expense::new(ExpenseId::FIRST, description, Money::from_cents(cents))
    }

    #[test]
    fn test_amount_change() {
        let diff = describe_changes(&expense("rent", 100000), &expense("rent", 120000)).unwrap();
        assert_eq!(diff, "amount: $1000.00 -> $1200.00");
    }

    #[test]
    fn test_both_fields_change() {
        let diff = describe_changes(&expense("taxi", 1500), &expense("bus", 250)).unwrap();
        assert_eq!(
            diff,
            "description: \"taxi\" -> \"bus\", amount: $15.00 -> $2.50"
        );
    }

    #[test]
    fn test_no_changes() {
        assert!(describe_changes(&expense("taxi", 1500), &expense("taxi", 1500)).is_none());
    }

    #[test]
    fn test_long_description_truncation() {
        let long = "a".repeat(100);
        let diff = describe_changes(&expense(&long, 1), &expense("short", 1)).unwrap();
        assert!(diff.contains("...\" -> \"short\""));
    }

    #[test]
    fn test_multibyte_truncation() {
        let long = "é".repeat(60);
        assert_eq!(quote(&long).chars().count(), 47 + 5);
    }
}
