//! Goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::goal::{format_goal_details, format_goal_list};
use crate::display::DisplayContext;
use crate::error::{LedgerError, LedgerResult};
use crate::models::GoalPatch;
use crate::services::{CreateGoalInput, GoalService};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_optional_amount};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal title
        title: String,
        /// Target amount (e.g., "1500.00")
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: String,
        /// Amount already saved
        #[arg(long, default_value = "0")]
        saved: String,
        /// Free-form category label
        #[arg(short, long, default_value = "")]
        category: String,
        /// Longer description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List goals with progress
    List,
    /// Show goal details
    Show {
        /// Goal ID
        id: String,
    },
    /// Add money to a goal
    Contribute {
        /// Goal ID
        id: String,
        /// Amount to add
        amount: String,
    },
    /// Edit a goal
    Edit {
        /// Goal ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New target amount
        #[arg(long)]
        target: Option<String>,
        /// New saved amount
        #[arg(long)]
        saved: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> LedgerResult<()> {
    let service = GoalService::new(storage);
    let ctx = DisplayContext::from_settings(settings);

    match cmd {
        GoalCommands::Add {
            title,
            target,
            deadline,
            saved,
            category,
            description,
        } => {
            let goal = service.create(CreateGoalInput {
                title,
                description,
                target_amount: parse_amount(&target)?,
                current_amount: parse_amount(&saved)?,
                deadline: parse_date(&deadline)?,
                category,
            })?;

            println!("{}: {}", ctx.labels().saved, goal.id);
            print!("{}", format_goal_details(&goal, &ctx));
        }

        GoalCommands::List => {
            print!("{}", format_goal_list(&service.list(), &ctx));
        }

        GoalCommands::Show { id } => {
            let goal = service
                .find(&id)
                .ok_or_else(|| LedgerError::goal_not_found(&id))?;
            print!("{}", format_goal_details(&goal, &ctx));
        }

        GoalCommands::Contribute { id, amount } => {
            let goal = service.contribute(&id, parse_amount(&amount)?)?;
            print!("{}", format_goal_details(&goal, &ctx));
        }

        GoalCommands::Edit {
            id,
            title,
            description,
            target,
            saved,
            deadline,
            category,
        } => {
            let patch = GoalPatch {
                title,
                description,
                target_amount: parse_optional_amount(target.as_deref())?,
                current_amount: parse_optional_amount(saved.as_deref())?,
                deadline: deadline.as_deref().map(parse_date).transpose()?,
                category,
            };

            if patch.is_empty() {
                println!("No changes specified. Use --title, --target, --saved, --deadline, --category or --description.");
                return Ok(());
            }

            let goal = service.update(&id, patch)?;
            println!("{}: {}", ctx.labels().saved, goal.id);
            print!("{}", format_goal_details(&goal, &ctx));
        }

        GoalCommands::Delete { id, force } => {
            let goal = service
                .find(&id)
                .ok_or_else(|| LedgerError::goal_not_found(&id))?;

            if !force {
                println!("About to delete goal:");
                print!("{}", format_goal_details(&goal, &ctx));
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
