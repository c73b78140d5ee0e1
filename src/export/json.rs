//! JSON export
//!
//! Writes every collection plus the preferences as one versioned document.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Debt, Goal, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Version of the application that wrote the export
    pub app_version: String,
    pub settings: Settings,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub debts: Vec<Debt>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub goal_count: usize,
    pub debt_count: usize,
    /// Earliest transaction date
    pub earliest_transaction: Option<String>,
    /// Latest transaction date
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot the whole ledger
    ///
    /// Collections are loaded strictly, so an unreadable file fails the export
    /// instead of silently exporting an empty list.
    pub fn from_storage(storage: &Storage, settings: &Settings) -> LedgerResult<Self> {
        let transactions = storage.transactions.load()?;
        let goals = storage.goals.load()?;
        let debts = storage.debts.load()?;

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            goal_count: goals.len(),
            debt_count: debts.len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings: settings.clone(),
            transactions,
            goals,
            debts,
            metadata,
        })
    }
}

/// Export the full ledger as pretty-printed JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::{Money, NewGoal, NewTransaction, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_json_export() {
        let (_temp_dir, storage) = create_test_storage();
        for day in [3, 17] {
            storage
                .transactions
                .append(NewTransaction {
                    kind: TransactionType::Expense,
                    amount: Money::from_cents(700),
                    description: "Metro".into(),
                    category: "transport".into(),
                    date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
                })
                .unwrap();
        }
        storage
            .goals
            .append(NewGoal {
                title: "Phone".into(),
                description: String::new(),
                target_amount: Money::from_cents(90000),
                current_amount: Money::zero(),
                deadline: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                category: String::new(),
            })
            .unwrap();

        let mut output = Vec::new();
        export_full_json(&storage, &Settings::default(), &mut output).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.metadata.transaction_count, 2);
        assert_eq!(parsed.metadata.goal_count, 1);
        assert_eq!(parsed.metadata.debt_count, 0);
        assert_eq!(parsed.metadata.earliest_transaction.as_deref(), Some("2025-02-03"));
        assert_eq!(parsed.metadata.latest_transaction.as_deref(), Some("2025-02-17"));
    }

    #[test]
    fn test_corrupt_collection_fails_export() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::write(storage.debts.path(), "{").unwrap();

        let mut output = Vec::new();
        assert!(export_full_json(&storage, &Settings::default(), &mut output).is_err());
    }
}
