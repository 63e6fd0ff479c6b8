//! List rendering for the ledger

use std::iter::FusedIterator;

use crate::models::Expense;

/// Column header printed above the expense rows
pub const LIST_HEADER: &str = "ID    Date          Description              Amount";

/// Lazily formatted list output: the header, then one row per expense in
/// ledger order
///
/// The iterator is cheap to clone, and [`crate::ledger::Ledger::list`] can be
/// called again to start over.
#[derive(Debug, Clone)]
pub struct ListRows<'a> {
    header_pending: bool,
    expenses: std::slice::Iter<'a, Expense>,
}

impl<'a> ListRows<'a> {
    pub(crate) fn new(expenses: &'a [Expense]) -> Self {
        Self {
            header_pending: true,
            expenses: expenses.iter(),
        }
    }
}

impl Iterator for ListRows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.header_pending {
            self.header_pending = false;
            return Some(LIST_HEADER.to_string());
        }
        self.expenses.next().map(|e| e.to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.expenses.len() + usize::from(self.header_pending);
        (n, Some(n))
    }
}

impl ExactSizeIterator for ListRows<'_> {}

impl FusedIterator for ListRows<'_> {}
