//! CLI command for data export
//!
//! Writes to a file when `--output` is given, otherwise to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
    /// CSV format (transactions only)
    Csv,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, settings, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;

            match format {
                ExportFormat::Csv => {
                    println!("Transactions exported to: {}", path.display());
                    println!("Note: CSV format exports transactions only. Use JSON or YAML for a full export.");
                }
                _ => println!("Full ledger exported to: {}", path.display()),
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, settings, format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    settings: &Settings,
    format: ExportFormat,
    writer: &mut W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Json => json::export_full_json(storage, settings, writer),
        ExportFormat::Yaml => yaml::export_full_yaml(storage, settings, writer),
        ExportFormat::Csv => csv::export_transactions_csv(storage, settings.language, writer),
    }
}
