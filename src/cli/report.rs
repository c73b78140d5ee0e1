//! Report CLI commands
//!
//! Implements CLI commands for generating reports.

use chrono::Datelike;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::DisplayContext;
use crate::error::LedgerResult;
use crate::models::TransactionType;
use crate::reports::{CategoryReport, MonthlyReport, UtilitiesReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expenses and balance for one month
    Monthly {
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12 (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Totals per category across all transactions
    Categories {
        /// Transaction type (income, expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
    },
    /// Utility bills grouped by month
    Utilities,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let ctx = DisplayContext::from_settings(settings);
    let transactions = storage.transactions.list();

    match cmd {
        ReportCommands::Monthly { year, month } => {
            let report = MonthlyReport::generate(
                &transactions,
                year.unwrap_or_else(|| ctx.today.year()),
                month.unwrap_or_else(|| ctx.today.month()),
            );
            print!("{}", report.format_terminal(ctx.language, ctx.currency));
        }

        ReportCommands::Categories { kind } => {
            let report = CategoryReport::generate(&transactions, kind);
            print!("{}", report.format_terminal(ctx.language, ctx.currency));
        }

        ReportCommands::Utilities => {
            let report = UtilitiesReport::generate(&transactions);
            print!("{}", report.format_terminal(ctx.language, ctx.currency));
        }
    }

    Ok(())
}
