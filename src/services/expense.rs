//! Expense service
//!
//! Applies a mutation to the ledger, persists it and records it in the
//! audit log. Reads (list, summaries) go straight to the [`Ledger`].
//!
//! A mutation is all-or-nothing: it is applied to a copy of the ledger, and
//! the caller's ledger only changes once both the save and the audit entry
//! have succeeded. When the audit write fails the previous ledger is saved
//! back before the error is returned.

use crate::error::{ExpenseError, ExpenseResult};
use crate::ledger::Ledger;
use crate::models::{Expense, ExpenseId, ExpenseUpdate, Money};
use crate::storage::Storage;

/// Result of an update request
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// The expense after the update
    pub expense: Expense,
    /// Whether any field actually changed
    pub changed: bool,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    ledger: &'a mut Ledger,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service over a ledger loaded from `storage`
    pub fn new(storage: &'a Storage, ledger: &'a mut Ledger) -> Self {
        Self { storage, ledger }
    }

    /// Record a new expense and save the ledger
    pub fn add(&mut self, description: &str, amount: Money) -> ExpenseResult<Expense> {
        let mut staged = self.ledger.clone();
        let expense = staged.add(description, amount)?.clone();

        self.commit(staged, |storage| storage.log_create(&expense))?;

        Ok(expense)
    }

    /// Update an expense; the ledger is only saved when something changed
    pub fn update(
        &mut self,
        id: ExpenseId,
        update: &ExpenseUpdate,
    ) -> ExpenseResult<UpdateOutcome> {
        let mut staged = self.ledger.clone();
        let changed = staged.update(id, update)?;

        // update() succeeded, so the id exists in both ledgers
        let after = staged
            .get(id)
            .cloned()
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        if changed {
            let before = self
                .ledger
                .get(id)
                .cloned()
                .ok_or_else(|| ExpenseError::expense_not_found(id))?;
            self.commit(staged, |storage| storage.log_update(&before, &after))?;
        }

        Ok(UpdateOutcome {
            expense: after,
            changed,
        })
    }

    /// Delete an expense and save the ledger
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let mut staged = self.ledger.clone();
        let removed = staged.delete(id)?;

        self.commit(staged, |storage| storage.log_delete(&removed))?;

        Ok(removed)
    }

    /// Save `staged`, audit it, then make it the caller's ledger
    fn commit<F>(&mut self, staged: Ledger, audit: F) -> ExpenseResult<()>
    where
        F: FnOnce(&Storage) -> ExpenseResult<()>,
    {
        self.storage.save_ledger(&staged)?;

        if let Err(err) = audit(self.storage) {
            self.storage.save_ledger(&*self.ledger)?;
            return Err(err);
        }

        *self.ledger = staged;
        Ok(())
    }

    pub fn ledger(&self) -> &Ledger {
        &*self.ledger
    }
}
