//! Expense CLI commands
//!
//! Implements `add`, `list`, `summary`, `update` and `delete`. Success
//! messages are kept word-for-word stable; scripts match on them.

use clap::Subcommand;

use crate::error::ExpenseResult;
use crate::ledger::Ledger;
use crate::models::{ExpenseId, ExpenseUpdate, Money, MonthFilter};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
        /// Amount spent (e.g. "20", "20.50")
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Money,
    },

    /// List all expenses
    List,

    /// Show total expenses, optionally for a single month
    Summary {
        /// Month number (1-12), matched in any year unless --year is given
        #[arg(short, long)]
        month: Option<u32>,
        /// Only count the month in this year
        #[arg(short, long, requires = "month")]
        year: Option<i32>,
    },

    /// Change the description and/or amount of an expense
    Update {
        /// Expense ID
        #[arg(short, long)]
        id: ExpenseId,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<Money>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(short, long)]
        id: ExpenseId,
    },
}

/// Handle an expense command against a loaded ledger
pub fn handle_expense_command(
    storage: &Storage,
    ledger: &mut Ledger,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
        } => {
            let expense = ExpenseService::new(storage, ledger).add(&description, amount)?;
            println!("Expense added successfully (ID: {})", expense.id);
        }

        ExpenseCommands::List => {
            for row in ledger.list() {
                println!("{}", row);
            }
        }

        ExpenseCommands::Summary { month, year } => match month {
            Some(month) => {
                let mut filter = MonthFilter::new(month)?;
                if let Some(year) = year {
                    filter = filter.in_year(year);
                }
                println!("{}", ledger.summary_for(filter)?);
            }
            None => println!("{}", ledger.summary()?),
        },

        ExpenseCommands::Update {
            id,
            description,
            amount,
        } => {
            let update = ExpenseUpdate {
                description,
                amount,
            };
            let outcome = ExpenseService::new(storage, ledger).update(id, &update)?;
            println!("Expense updated successfully (ID: {})", outcome.expense.id);
        }

        ExpenseCommands::Delete { id } => {
            ExpenseService::new(storage, ledger).delete(id)?;
            println!("Expense deleted successfully");
        }
    }

    Ok(())
}
