//! Service layer for Pocketbook
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, clamping of running totals, and audit logging.

pub mod debt;
pub mod goal;
pub mod preferences;
pub mod transaction;

pub use debt::{CreateDebtInput, DebtService};
pub use goal::{CreateGoalInput, GoalService};
pub use preferences::PreferencesService;
pub use transaction::{CreateTransactionInput, TransactionService, RECENT_LIMIT};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

/// Trim a required text field, rejecting blank input
fn require_text(value: &str, field: &str) -> LedgerResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Largest amount accepted from input: one trillion currency units
pub const MAX_AMOUNT: Money = Money::from_cents(1_000_000_000_000 * 100);

fn require_positive(amount: Money, field: &str) -> LedgerResult<Money> {
    if !amount.is_positive() {
        return Err(LedgerError::Validation(format!(
            "{} must be greater than zero, got {}",
            field, amount
        )));
    }
    require_within_limit(amount, field)
}

fn require_non_negative(amount: Money, field: &str) -> LedgerResult<Money> {
    if amount.is_negative() {
        return Err(LedgerError::Validation(format!(
            "{} cannot be negative, got {}",
            field, amount
        )));
    }
    require_within_limit(amount, field)
}

fn require_within_limit(amount: Money, field: &str) -> LedgerResult<Money> {
    if amount > MAX_AMOUNT {
        return Err(LedgerError::Validation(format!(
            "{} cannot exceed {}, got {}",
            field, MAX_AMOUNT, amount
        )));
    }
    Ok(amount)
}
