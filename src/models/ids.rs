//! Expense identifiers
//!
//! Ids are small sequential integers rather than UUIDs: users type them on
//! the command line (`update --id 3`), so they have to stay short.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense, unique within a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id handed out to the first expense of an empty ledger
    pub const FIRST: ExpenseId = ExpenseId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` once the id space is used up
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next() {
        assert_eq!(ExpenseId::FIRST.next(), Some(ExpenseId::new(2)));
        assert_eq!(ExpenseId::new(u64::MAX).next(), None);
    }

    #[test]
    fn test_display_is_plain_number() {
        assert_eq!(ExpenseId::new(42).to_string(), "42");
    }

    #[test]
    fn test_parse() {
        assert_eq!("3".parse::<ExpenseId>().unwrap(), ExpenseId::new(3));
        assert_eq!("#3".parse::<ExpenseId>().unwrap(), ExpenseId::new(3));
        assert!("-1".parse::<ExpenseId>().is_err());
        assert!("abc".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_serialization() {
        let id = ExpenseId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
