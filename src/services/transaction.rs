//! Transaction service
//!
//! Records and deletes income/expense entries. Transactions have no update
//! operation: a wrong entry is deleted and recorded again.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::category::{categories_for, find_category};
use crate::models::{Money, NewTransaction, Transaction, TransactionType};
use crate::reports::filter::{filter_transactions, TransactionFilter};
use crate::storage::Storage;

use super::{require_positive, require_text};

/// Number of entries shown in the dashboard's recent list
pub const RECENT_LIMIT: usize = 5;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for recording a transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub amount: Money,
    pub description: String,
    /// Category ID, legacy ID or localized name
    pub category: String,
    pub date: NaiveDate,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and record a transaction
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let amount = require_positive(input.amount, "Amount")?;
        let description = require_text(&input.description, "Description")?;

        let category = find_category(input.kind, &input.category).ok_or_else(|| {
            let valid: Vec<&str> = categories_for(input.kind).iter().map(|c| c.id).collect();
            LedgerError::Validation(format!(
                "Unknown {} category '{}'. Valid categories: {}",
                input.kind,
                input.category.trim(),
                valid.join(", ")
            ))
        })?;

        let txn = self.storage.transactions.append(NewTransaction {
            kind: input.kind,
            amount,
            description,
            category: category.id.to_string(),
            date: input.date,
        })?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        )?;

        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "transaction recorded");
        Ok(txn)
    }

    /// All transactions, newest first
    pub fn list(&self) -> Vec<Transaction> {
        self.storage.transactions.list()
    }

    /// Transactions matching a type/category/search filter
    pub fn list_filtered(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        filter_transactions(&self.list(), filter)
    }

    /// The newest `count` transactions
    pub fn recent(&self, count: usize) -> Vec<Transaction> {
        let mut transactions = self.list();
        transactions.truncate(count);
        transactions
    }

    /// Find a transaction by full or short ID
    pub fn find(&self, identifier: &str) -> Option<Transaction> {
        self.storage.transactions.find(identifier)
    }

    /// Delete a transaction by full or short ID
    pub fn delete(&self, identifier: &str) -> LedgerResult<Transaction> {
        let txn = self
            .find(identifier)
            .ok_or_else(|| LedgerError::transaction_not_found(identifier))?;

        let removed = self
            .storage
            .transactions
            .remove(txn.id)?
            .ok_or_else(|| LedgerError::transaction_not_found(identifier))?;

        self.storage.log_delete(
            EntityType::Transaction,
            removed.id.to_string(),
            Some(removed.description.clone()),
            &removed,
        )?;

        info!(id = %removed.id, "transaction deleted");
        Ok(removed)
    }
}
