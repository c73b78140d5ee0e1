//! YAML export
//!
//! The same document as the JSON export, in a human-readable format.

use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full ledger to YAML
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage, settings)?;
    let io_err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# Pocketbook export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))
}
