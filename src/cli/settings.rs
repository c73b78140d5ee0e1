//! Settings CLI commands
//!
//! Shows and changes the display preferences.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::i18n;
use crate::models::{Currency, Language, Theme};
use crate::services::PreferencesService;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current preferences
    Show,
    /// Set the interface language (az, ru, en)
    Language {
        language: Language,
    },
    /// Set the display currency (AZN, USD, RUB, TRY)
    Currency {
        currency: Currency,
    },
    /// Set the theme (light, dark, toggle); toggles when omitted
    Theme {
        theme: Option<String>,
    },
}

/// Handle a settings command
pub fn handle_settings_command(storage: &Storage, cmd: SettingsCommands) -> LedgerResult<()> {
    let service = PreferencesService::new(storage);

    let settings = match cmd {
        SettingsCommands::Show => service.current()?,
        SettingsCommands::Language { language } => saved(service.set_language(language)?),
        SettingsCommands::Currency { currency } => saved(service.set_currency(currency)?),
        SettingsCommands::Theme { theme } => match theme.as_deref().map(str::trim) {
            None | Some("toggle") => saved(service.toggle_theme()?),
            Some(value) => {
                let theme: Theme = value.parse().map_err(LedgerError::Validation)?;
                saved(service.set_theme(theme)?)
            }
        },
    };

    print!("{}", format_settings(&settings));
    Ok(())
}

fn saved(settings: Settings) -> Settings {
    println!("{}", i18n::labels(settings.language).saved);
    settings
}

fn format_settings(settings: &Settings) -> String {
    format!(
        "Language: {} ({})\nCurrency: {} ({})\nTheme:    {}\n",
        settings.language.native_name(),
        settings.language.code(),
        settings.currency.code(),
        settings.currency.symbol(),
        settings.theme
    )
}
