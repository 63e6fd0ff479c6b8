//! Core data models for the expense tracker
//!
//! Expenses, their identifiers, money amounts and the month filter used by
//! summaries.

pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use expense::{Expense, ExpenseUpdate, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use period::MonthFilter;
