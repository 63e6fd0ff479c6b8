//! Expense model
//!
//! A single tracked expense and the field-level update applied to it.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Date layout used for list rows
pub const ROW_DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the ledger
    pub id: ExpenseId,

    /// When the expense was created or last modified
    pub date: DateTime<Local>,

    /// Lowercased description
    pub description: String,

    /// Amount spent, never negative
    pub amount: Money,
}

impl Expense {
    /// Create a new expense stamped with the current time
    ///
    /// The description is lowercased. Callers are expected to have run
    /// [`validate_description`] and [`validate_amount`] first.
    pub fn new(id: ExpenseId, description: &str, amount: Money) -> Self {
        Self::with_date(id, description, amount, Local::now())
    }

    /// Create a new expense with an explicit timestamp
    pub fn with_date(
        id: ExpenseId,
        description: &str,
        amount: Money,
        date: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            date,
            description: normalize_description(description),
            amount,
        }
    }

    /// Apply an update, returning whether anything changed
    ///
    /// The timestamp is refreshed only when a field actually changes.
    pub fn apply(&mut self, update: &ExpenseUpdate) -> bool {
        let mut changed = false;

        if let Some(description) = &update.description {
            let description = normalize_description(description);
            if description != normalize_description(&self.description) {
                self.description = description;
                changed = true;
            }
        }

        if let Some(amount) = update.amount {
            if amount != self.amount {
                self.amount = amount;
                changed = true;
            }
        }

        if changed {
            self.date = Local::now();
        }

        changed
    }
}

impl fmt::Display for Expense {
    /// Renders the expense as a fixed-width list row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6}{:<14}{:<25}{}",
            self.id.to_string(),
            self.date.format(ROW_DATE_FORMAT).to_string(),
            self.description,
            self.amount
        )
    }
}

/// Field-level changes for an existing expense
///
/// `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<Money>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Build an update from the legacy sentinel convention: an empty
    /// description or a negative amount means "leave unchanged"
    pub fn from_sentinels(description: &str, amount: Money) -> Self {
        Self {
            description: (!description.is_empty()).then(|| description.to_string()),
            amount: (!amount.is_negative()).then_some(amount),
        }
    }

    /// True when the update touches no field
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none()
    }

    /// Validate every supplied field
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        Ok(())
    }
}

/// Lowercase a description for storage and comparison
pub fn normalize_description(description: &str) -> String {
    description.to_lowercase()
}

pub fn validate_description(description: &str) -> Result<(), ExpenseValidationError> {
    if description.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyDescription);
    }
    Ok(())
}

pub fn validate_amount(amount: Money) -> Result<(), ExpenseValidationError> {
    if amount.is_negative() {
        return Err(ExpenseValidationError::NegativeAmount(amount));
    }
    if amount > Money::MAX {
        return Err(ExpenseValidationError::AmountTooLarge(amount));
    }
    Ok(())
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount cannot exceed {} (got {})", Money::MAX, amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
