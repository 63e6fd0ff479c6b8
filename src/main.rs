use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, handle_history_command, ExpenseCommands,
    ExportArgs,
};
use expense_tracker::config::{ExpensePaths, Settings, DEFAULT_LEDGER_FILE};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Record, edit and summarize personal expenses",
    long_about = "expense-tracker keeps a small ledger of expenses in a JSON file. \
                  Add, update and delete entries, list them, and total them \
                  overall or for a single month."
)]
struct Cli {
    /// Ledger file to read and write
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export the ledger to CSV, JSON or YAML
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load(&paths)?;

    let ledger_file = cli
        .file
        .or_else(|| settings.ledger_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILE));
    let paths = paths.with_ledger_file(ledger_file);

    let storage = Storage::new(paths.clone(), &settings);

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut ledger = storage.load_ledger()?;
            handle_expense_command(&storage, &mut ledger, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let ledger = storage.load_ledger()?;
            handle_export_command(&ledger, args)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Schema version: {}", settings.schema_version);
            println!("  Audit enabled:  {}", settings.audit_enabled);
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
