//! Month filter for summaries
//!
//! A calendar month, optionally pinned to a year. Without a year the filter
//! matches that month in every year.

use chrono::{DateTime, Datelike, Local, Month};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// Selects the expenses dated in a given calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFilter {
    month: Month,
    year: Option<i32>,
}

impl MonthFilter {
    /// Create a year-agnostic filter from a month number (1-12)
    pub fn new(month: u32) -> ExpenseResult<Self> {
        let month = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "Month must be between 1 and 12 (got {})",
                    month
                ))
            })?;

        Ok(Self { month, year: None })
    }

    /// Restrict the filter to a single year
    pub fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Month number, 1-12
    pub fn number(&self) -> u32 {
        self.month.number_from_month()
    }

    /// English display name of the month
    pub fn name(&self) -> &'static str {
        self.month.name()
    }

    pub fn matches(&self, date: &DateTime<Local>) -> bool {
        date.month() == self.number() && self.year.map_or(true, |y| date.year() == y)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} {}", self.name(), year),
            None => write!(f, "{}", self.name()),
        }
    }
}
