//! CSV export of transactions (spreadsheet-compatible)

use std::io::Write;

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::category::display_name;
use crate::models::Language;
use crate::storage::Storage;

#[derive(Serialize)]
struct TransactionRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description")]
    description: &'a str,
    /// Signed: income positive, expense negative
    #[serde(rename = "Amount")]
    amount: String,
}

/// Export all transactions to CSV, newest first
///
/// Category names are written in `language`.
pub fn export_transactions_csv<W: Write>(
    storage: &Storage,
    language: Language,
    writer: W,
) -> LedgerResult<()> {
    let transactions = storage.transactions.load()?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer
            .write_record(["ID", "Date", "Type", "Category", "Description", "Amount"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    for txn in &transactions {
        csv_writer
            .serialize(TransactionRow {
                id: txn.id.as_uuid().to_string(),
                date: txn.date.format("%Y-%m-%d").to_string(),
                kind: txn.kind.to_string(),
                category: display_name(&txn.category, language),
                description: &txn.description,
                amount: txn.signed_amount().to_string(),
            })
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::{Money, NewTransaction, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_csv_export() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .transactions
            .append(NewTransaction {
                kind: TransactionType::Expense,
                amount: Money::from_cents(1999),
                description: "Kitab, dəftər".into(),
                category: "education".into(),
                date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            })
            .unwrap();

        let mut output = Vec::new();
        export_transactions_csv(&storage, Language::En, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();

        let mut lines = csv_string.lines();
        assert_eq!(lines.next(), Some("ID,Date,Type,Category,Description,Amount"));
        let row = lines.next().unwrap();
        assert!(row.contains("2025-09-01,expense,Education,\"Kitab, dəftər\",-19.99"));
    }

    #[test]
    fn test_csv_export_empty_has_header() {
        let (_temp_dir, storage) = create_test_storage();

        let mut output = Vec::new();
        export_transactions_csv(&storage, Language::Az, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ID,Date,Type,Category,Description,Amount\n"
        );
    }
}
