//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing and deleting transactions.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::{
    format_category_list, format_transaction_details, format_transaction_list,
};
use crate::display::DisplayContext;
use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionType;
use crate::reports::filter::{TransactionFilter, TypeFilter};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or_today};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// Transaction type (income, expense)
        kind: TransactionType,
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the money was for
        description: String,
        /// Category ID or name
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by type (all, income, expense)
        #[arg(short = 't', long = "type", default_value = "all")]
        kind: TypeFilter,
        /// Filter by category ID or name
        #[arg(short, long)]
        category: Option<String>,
        /// Search description and category
        #[arg(short, long)]
        search: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List the available categories
    Categories {
        /// Only show categories for this type
        kind: Option<TransactionType>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let service = TransactionService::new(storage);
    let ctx = DisplayContext::from_settings(settings);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            description,
            category,
            date,
        } => {
            let input = CreateTransactionInput {
                kind,
                amount: parse_amount(&amount)?,
                description,
                category,
                date: parse_date_or_today(date.as_deref())?,
            };

            let txn = service.create(input)?;
            println!("{}: {}", ctx.labels().saved, txn.id);
            print!("{}", format_transaction_details(&txn, &ctx));
        }

        TransactionCommands::List {
            kind,
            category,
            search,
            limit,
        } => {
            let mut filter = TransactionFilter::new().kind(kind);
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(search) = search {
                filter = filter.search(search);
            }

            let mut transactions = service.list_filtered(&filter);
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }
            print!("{}", format_transaction_list(&transactions, &ctx));
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(&txn, &ctx));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service
                .find(&id)
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(&txn, &ctx));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&id)?;
            println!("{}: {} ({})", ctx.labels().deleted, deleted.id, deleted.description);
        }

        TransactionCommands::Categories { kind } => match kind {
            Some(kind) => print!("{}", format_category_list(kind, &ctx)),
            None => {
                print!("{}", format_category_list(TransactionType::Expense, &ctx));
                println!();
                print!("{}", format_category_list(TransactionType::Income, &ctx));
            }
        },
    }

    Ok(())
}
