//! The expense ledger
//!
//! An ordered, id-addressed collection of expenses. The ledger is a plain
//! value: it is loaded from its backing file, mutated through `&mut self`
//! for the duration of one command, and written back with [`Ledger::save`].
//!
//! Ids are assigned as `max id + 1` and are never renumbered, so an id keeps
//! pointing at the same expense after other expenses are deleted.

mod list;
mod summary;

pub use list::{ListRows, LIST_HEADER};
pub use summary::{MonthlySummary, Summary};

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::{validate_amount, validate_description};
use crate::models::{Expense, ExpenseId, ExpenseUpdate, Money, MonthFilter};
use crate::storage::file_io::{read_json, write_json_atomic};

/// In-memory ledger of expenses, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing records, checking its invariants
    ///
    /// Used when reading a ledger file, so violations are reported as
    /// parse errors.
    pub fn from_expenses(expenses: Vec<Expense>) -> ExpenseResult<Self> {
        let mut seen = HashSet::with_capacity(expenses.len());

        for expense in &expenses {
            if expense.id.value() == 0 {
                return Err(ExpenseError::Parse("Expense ids must be positive".into()));
            }
            if !seen.insert(expense.id) {
                return Err(ExpenseError::Parse(format!(
                    "Duplicate expense id: {}",
                    expense.id
                )));
            }
            if expense.amount.is_negative() {
                return Err(ExpenseError::Parse(format!(
                    "Expense {} has a negative amount",
                    expense.id
                )));
            }
            if expense.amount > Money::MAX {
                return Err(ExpenseError::Parse(format!(
                    "Expense {} has an amount above {}",
                    expense.id,
                    Money::MAX
                )));
            }
        }

        Ok(Self { expenses })
    }

    /// Load a ledger from `path`
    ///
    /// A missing or empty file yields an empty ledger.
    pub fn load<P: AsRef<Path>>(path: P) -> ExpenseResult<Self> {
        let expenses: Vec<Expense> = read_json(path)?;
        Self::from_expenses(expenses)
    }

    /// Write the whole ledger to `path`, replacing any existing content
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ExpenseResult<()> {
        write_json_atomic(path, &self.expenses)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// The most recently added expense
    pub fn last(&self) -> Option<&Expense> {
        self.expenses.last()
    }

    /// The id the next added expense will receive
    ///
    /// Fails once the highest id in the ledger is `u64::MAX`.
    pub fn next_id(&self) -> ExpenseResult<ExpenseId> {
        match self.expenses.iter().map(|e| e.id).max() {
            None => Ok(ExpenseId::FIRST),
            Some(max) => max.next().ok_or_else(|| {
                ExpenseError::Validation(format!("No expense id left after {}", max))
            }),
        }
    }

    /// Record a new expense
    ///
    /// Fails with a validation error, leaving the ledger untouched, when the
    /// description is empty or the amount negative.
    pub fn add(&mut self, description: &str, amount: Money) -> ExpenseResult<&Expense> {
        validate_description(description)
            .and_then(|_| validate_amount(amount))
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let expense = Expense::new(self.next_id()?, description, amount);
        self.expenses.push(expense);

        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Update the expense with the given id
    ///
    /// Returns `Ok(false)` when nothing changed: either the update was empty
    /// or it repeated the current values.
    pub fn update(&mut self, id: ExpenseId, update: &ExpenseUpdate) -> ExpenseResult<bool> {
        update
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        Ok(expense.apply(update))
    }

    /// Remove the expense with the given id, keeping the order of the rest
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        Ok(self.expenses.remove(index))
    }

    /// Formatted list rows, header first
    pub fn list(&self) -> ListRows<'_> {
        ListRows::new(&self.expenses)
    }

    /// Total of every expense
    pub fn summary(&self) -> ExpenseResult<Summary> {
        Ok(Summary {
            total: total_of(&self.expenses)?,
            count: self.expenses.len(),
        })
    }

    /// Total of the expenses dated in `month` (1-12) of any year
    pub fn summary_for_month(&self, month: u32) -> ExpenseResult<MonthlySummary> {
        self.summary_for(MonthFilter::new(month)?)
    }

    /// Total of the expenses matching `filter`
    pub fn summary_for(&self, filter: MonthFilter) -> ExpenseResult<MonthlySummary> {
        let matching: Vec<&Expense> = self
            .expenses
            .iter()
            .filter(|e| filter.matches(&e.date))
            .collect();

        Ok(MonthlySummary {
            filter,
            total: total_of(matching.iter().copied())?,
            count: matching.len(),
        })
    }
}

fn total_of<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> ExpenseResult<Money> {
    Money::checked_sum(expenses.into_iter().map(|e| e.amount))
        .ok_or_else(|| ExpenseError::Validation("Total of expenses is too large".into()))
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}
