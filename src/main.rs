use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use pocketbook::cli::{
    handle_debt_command, handle_export_command, handle_goal_command, handle_report_command,
    handle_settings_command, handle_transaction_command, DebtCommands, ExportFormat, GoalCommands,
    ReportCommands, SettingsCommands, TransactionCommands,
};
use pocketbook::config::{paths::LedgerPaths, settings::Settings};
use pocketbook::display::{format_dashboard, DisplayContext};
use pocketbook::i18n;
use pocketbook::services::{DebtService, GoalService, TransactionService, RECENT_LIMIT};
use pocketbook::storage::Storage;

/// Environment variable holding the log filter (e.g. "pocketbook=debug")
const LOG_ENV: &str = "POCKETBOOK_LOG";

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Local personal-finance tracker",
    long_about = "Pocketbook records income and expenses, tracks savings goals and \
                  debts, and summarizes them by month and category. All data stays \
                  in local JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show balance, this month's totals and recent transactions
    #[command(alias = "dash")]
    Dashboard,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Debt commands
    #[command(subcommand)]
    Debt(DebtCommands),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Language, currency and theme
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export data to JSON, YAML or CSV
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete all transactions, goals and debts (preferences are kept)
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Initialize the data directory and save default preferences
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{:#}", err), "command failed");
            eprintln!("{}: {:#}", failure_label(), err);
            ExitCode::FAILURE
        }
    }
}

/// Localized failure prefix, falling back to the default language
fn failure_label() -> &'static str {
    let language = LedgerPaths::new()
        .and_then(|paths| Settings::load_or_create(&paths))
        .map(|settings| settings.language)
        .unwrap_or_default();
    i18n::labels(language).generic_error
}

fn run(cli: Cli) -> Result<()> {
    let paths = LedgerPaths::new()?;
    let storage = Storage::new(paths.clone())?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Dashboard) | None => {
            let ctx = DisplayContext::from_settings(&settings);
            let transactions = TransactionService::new(&storage);
            let all = transactions.list();
            let recent = transactions.recent(RECENT_LIMIT);
            let goals = GoalService::new(&storage).list();
            let debts = DebtService::new(&storage).list();
            print!("{}", format_dashboard(&all, &recent, &goals, &debts, &ctx));
        }
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Debt(cmd)) => handle_debt_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&storage, cmd)?,
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, &settings, format, output)?
        }
        Some(Commands::Clear { force }) => {
            if !force {
                println!("This deletes every transaction, goal and debt. Preferences are kept.");
                println!();
                println!("To proceed, run again with --force flag:");
                println!("  pocketbook clear --force");
                return Ok(());
            }

            storage.clear_all()?;
            println!("{}", i18n::labels(settings.language).cleared);
        }
        Some(Commands::Audit { count }) => {
            let entries = storage.audit().read_recent(count)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Init) => {
            println!("Initializing Pocketbook at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'pocketbook transaction categories' to see the available categories.");
        }
        Some(Commands::Config) => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!("Initialized:     {}", if storage.is_initialized() { "yes" } else { "no" });
            println!();
            println!("Settings:");
            println!("  Language: {}", settings.language);
            println!("  Currency: {}", settings.currency);
            println!("  Theme:    {}", settings.theme);
        }
    }

    Ok(())
}
