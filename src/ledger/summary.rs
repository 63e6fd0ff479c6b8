//! Expense totals

use std::fmt;

use serde::Serialize;

use crate::models::{Money, MonthFilter};

/// Total of every expense in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: Money,
    pub count: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total expenses: {}", self.total)
    }
}

/// Total of the expenses dated in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    pub filter: MonthFilter,
    pub total: Money,
    pub count: usize,
}

impl MonthlySummary {
    /// Display name of the summarized month
    pub fn month_name(&self) -> &'static str {
        self.filter.name()
    }
}

impl fmt::Display for MonthlySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total expenses for {}: {}", self.filter, self.total)
    }
}
