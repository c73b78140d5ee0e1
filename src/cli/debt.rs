//! Debt CLI commands

use chrono::Datelike;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::debt::{format_debt_details, format_debt_list};
use crate::display::DisplayContext;
use crate::error::{LedgerError, LedgerResult};
use crate::models::DebtPatch;
use crate::services::{CreateDebtInput, DebtService};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_optional_amount};

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Record a debt
    Add {
        /// Debt title
        title: String,
        /// Amount owed (e.g., "200.00")
        amount: String,
        /// Who the money is owed to
        #[arg(long)]
        creditor: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        /// Amount already paid
        #[arg(long, default_value = "0")]
        paid: String,
        /// Longer description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List debts
    List {
        /// Only debts due in or before this year (with --month)
        #[arg(long, requires = "month")]
        year: Option<i32>,
        /// Only debts due in or before this month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Show debt details
    Show {
        /// Debt ID
        id: String,
    },
    /// Record a payment towards a debt
    Pay {
        /// Debt ID
        id: String,
        /// Amount paid
        amount: String,
    },
    /// Edit a debt
    Edit {
        /// Debt ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New amount owed
        #[arg(long)]
        amount: Option<String>,
        /// New paid amount
        #[arg(long)]
        paid: Option<String>,
        #[arg(long)]
        creditor: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete a debt
    Delete {
        /// Debt ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a debt command
pub fn handle_debt_command(
    storage: &Storage,
    settings: &Settings,
    cmd: DebtCommands,
) -> LedgerResult<()> {
    let service = DebtService::new(storage);
    let ctx = DisplayContext::from_settings(settings);

    match cmd {
        DebtCommands::Add {
            title,
            amount,
            creditor,
            due,
            paid,
            description,
        } => {
            let debt = service.create(CreateDebtInput {
                title,
                description,
                amount: parse_amount(&amount)?,
                paid_amount: parse_amount(&paid)?,
                creditor,
                due_date: parse_date(&due)?,
            })?;

            println!("{}: {}", ctx.labels().saved, debt.id);
            print!("{}", format_debt_details(&debt, &ctx));
        }

        DebtCommands::List { year, month } => {
            let debts = match month {
                Some(month) => service.list_due_by(year.unwrap_or_else(|| ctx.today.year()), month),
                None => service.list(),
            };
            print!("{}", format_debt_list(&debts, &ctx));
        }

        DebtCommands::Show { id } => {
            let debt = service
                .find(&id)
                .ok_or_else(|| LedgerError::debt_not_found(&id))?;
            print!("{}", format_debt_details(&debt, &ctx));
        }

        DebtCommands::Pay { id, amount } => {
            let debt = service.pay(&id, parse_amount(&amount)?)?;
            print!("{}", format_debt_details(&debt, &ctx));
        }

        DebtCommands::Edit {
            id,
            title,
            description,
            amount,
            paid,
            creditor,
            due,
        } => {
            let patch = DebtPatch {
                title,
                description,
                amount: parse_optional_amount(amount.as_deref())?,
                paid_amount: parse_optional_amount(paid.as_deref())?,
                creditor,
                due_date: due.as_deref().map(parse_date).transpose()?,
            };

            if patch.is_empty() {
                println!("No changes specified. Use --title, --amount, --paid, --creditor, --due or --description.");
                return Ok(());
            }

            let debt = service.update(&id, patch)?;
            println!("{}: {}", ctx.labels().saved, debt.id);
            print!("{}", format_debt_details(&debt, &ctx));
        }

        DebtCommands::Delete { id, force } => {
            let debt = service
                .find(&id)
                .ok_or_else(|| LedgerError::debt_not_found(&id))?;

            if !force {
                println!("About to delete debt:");
                print!("{}", format_debt_details(&debt, &ctx));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&id)?;
            println!("{}: {} ({})", ctx.labels().deleted, deleted.id, deleted.title);
        }
    }

    Ok(())
}
