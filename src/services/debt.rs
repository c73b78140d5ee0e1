//! Debt service
//!
//! Debts are paid off through partial payments; the paid amount is clamped
//! at the amount owed.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Debt, DebtPatch, Money, NewDebt};
use crate::reports::progress::debts_due_by;
use crate::storage::Storage;

use super::{require_non_negative, require_positive, require_text};

/// Service for debt management
pub struct DebtService<'a> {
    storage: &'a Storage,
}

/// Input for recording a debt
#[derive(Debug, Clone)]
pub struct CreateDebtInput {
    pub title: String,
    pub description: String,
    pub amount: Money,
    pub paid_amount: Money,
    pub creditor: String,
    pub due_date: NaiveDate,
}

impl<'a> DebtService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, input: CreateDebtInput) -> LedgerResult<Debt> {
        let title = require_text(&input.title, "Title")?;
        let creditor = require_text(&input.creditor, "Creditor")?;
        let amount = require_positive(input.amount, "Amount")?;
        let paid_amount = require_non_negative(input.paid_amount, "Paid amount")?;

        let debt = self.storage.debts.append(NewDebt {
            title,
            description: input.description.trim().to_string(),
            amount,
            paid_amount: paid_amount.min(amount),
            creditor,
            due_date: input.due_date,
        })?;

        self.storage.log_create(
            EntityType::Debt,
            debt.id.to_string(),
            Some(debt.title.clone()),
            &debt,
        )?;

        info!(id = %debt.id, amount = %debt.amount, "debt recorded");
        Ok(debt)
    }

    /// All debts, newest first
    pub fn list(&self) -> Vec<Debt> {
        self.storage.debts.list()
    }

    /// Debts due in or before the given month, or all debts if none are
    pub fn list_due_by(&self, year: i32, month: u32) -> Vec<Debt> {
        debts_due_by(&self.list(), year, month)
    }

    pub fn find(&self, identifier: &str) -> Option<Debt> {
        self.storage.debts.find(identifier)
    }

    fn resolve(&self, identifier: &str) -> LedgerResult<Debt> {
        self.find(identifier)
            .ok_or_else(|| LedgerError::debt_not_found(identifier))
    }

    /// Record a payment, clamping the paid amount at the amount owed
    pub fn pay(&self, identifier: &str, amount: Money) -> LedgerResult<Debt> {
        let amount = require_positive(amount, "Payment")?;
        let debt = self.resolve(identifier)?;

        if debt.is_paid() {
            return Err(LedgerError::Validation(format!(
                "Debt '{}' is already paid off",
                debt.title
            )));
        }

        let (before, after) = self
            .storage
            .debts
            .update_with(debt.id, |d| {
                d.paid_amount = (d.paid_amount + amount).min(d.amount);
            })?
            .ok_or_else(|| LedgerError::debt_not_found(identifier))?;

        self.storage.log_update(
            EntityType::Debt,
            after.id.to_string(),
            Some(after.title.clone()),
            &before,
            &after,
        )?;

        info!(
            id = %after.id,
            paid = %after.paid_amount,
            settled = after.is_paid(),
            "debt payment recorded"
        );
        Ok(after)
    }

    /// Apply a partial update to a debt
    pub fn update(&self, identifier: &str, patch: DebtPatch) -> LedgerResult<Debt> {
        let debt = self.resolve(identifier)?;
        if patch.is_empty() {
            return Ok(debt);
        }

        let patch = DebtPatch {
            title: patch.title.as_deref().map(|t| require_text(t, "Title")).transpose()?,
            creditor: patch
                .creditor
                .as_deref()
                .map(|c| require_text(c, "Creditor"))
                .transpose()?,
            amount: patch
                .amount
                .map(|a| require_positive(a, "Amount"))
                .transpose()?,
            paid_amount: patch
                .paid_amount
                .map(|a| require_non_negative(a, "Paid amount"))
                .transpose()?,
            ..patch
        };

        let (before, after) = self
            .storage
            .debts
            .update_with(debt.id, |d| {
                patch.apply_to(d);
                d.paid_amount = d.paid_amount.min(d.amount);
            })?
            .ok_or_else(|| LedgerError::debt_not_found(identifier))?;

        self.storage.log_update(
            EntityType::Debt,
            after.id.to_string(),
            Some(after.title.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    pub fn delete(&self, identifier: &str) -> LedgerResult<Debt> {
        let debt = self.resolve(identifier)?;
        let removed = self
            .storage
            .debts
            .remove(debt.id)?
            .ok_or_else(|| LedgerError::debt_not_found(identifier))?;

        self.storage.log_delete(
            EntityType::Debt,
            removed.id.to_string(),
            Some(removed.title.clone()),
            &removed,
        )?;

        info!(id = %removed.id, "debt deleted");
        Ok(removed)
    }
}
