//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod debt;
pub mod export;
pub mod goal;
pub mod report;
pub mod settings;
pub mod transaction;

pub use debt::{handle_debt_command, DebtCommands};
pub use export::{handle_export_command, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

/// Parse a user-entered amount such as "12.50" or "12"
pub(crate) fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '12.50' or '12'. Error: {}",
            input, e
        ))
    })
}

pub(crate) fn parse_optional_amount(input: Option<&str>) -> LedgerResult<Option<Money>> {
    input.map(parse_amount).transpose()
}

/// Parse a YYYY-MM-DD date
pub(crate) fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse an optional date, defaulting to today
pub(crate) fn parse_date_or_today(input: Option<&str>) -> LedgerResult<NaiveDate> {
    match input {
        Some(date) => parse_date(date),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert!(parse_date("15.03.2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }
}
