//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_json, export_yaml};
use crate::ledger::Ledger;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    Csv,
    /// JSON with metadata
    Json,
    /// YAML with metadata, human-readable
    Yaml,
}

/// Arguments of the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short = 'F', long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(ledger: &Ledger, args: ExportArgs) -> ExpenseResult<()> {
    let count = write_export(ledger, &args.output, args.format, args.pretty)?;
    println!("Exported {} expenses to {}", count, args.output.display());
    Ok(())
}

/// Write the ledger to `output` in the given format
pub fn write_export(
    ledger: &Ledger,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> ExpenseResult<usize> {
    let file = File::create(output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let count = match format {
        ExportFormat::Csv => export_expenses_csv(ledger, &mut writer)?,
        ExportFormat::Json => export_json(ledger, &mut writer, pretty)?,
        ExportFormat::Yaml => export_yaml(ledger, &mut writer)?,
    };

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add("Cinema", Money::from_cents(1200)).unwrap();
        ledger.add("Popcorn", Money::from_cents(650)).unwrap();
        ledger
    }

    #[test]
    fn test_write_each_format() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = sample_ledger();

        for (format, name) in [
            (ExportFormat::Csv, "out.csv"),
            (ExportFormat::Json, "out.json"),
            (ExportFormat::Yaml, "out.yaml"),
        ] {
            let path = temp_dir.path().join(name);
            let count = write_export(&ledger, &path, format, false).unwrap();

            assert_eq!(count, 2);
            let contents = std::fs::read_to_string(&path).unwrap();
            assert!(contents.contains("popcorn"), "{:?} export missing data", format);
        }
    }

    #[test]
    fn test_unwritable_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join("out.csv");

        let err = write_export(&sample_ledger(), &path, ExportFormat::Csv, false).unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
    }
}
