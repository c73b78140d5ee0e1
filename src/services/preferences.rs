//! Preference service
//!
//! Language, currency and theme changes. Each change is saved to
//! `config.json` immediately and recorded in the audit log.

use tracing::info;

use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::models::{Currency, Language, Theme};
use crate::storage::Storage;

/// Service for display preferences
pub struct PreferencesService<'a> {
    storage: &'a Storage,
}

impl<'a> PreferencesService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current settings, defaults when nothing was saved yet
    pub fn current(&self) -> LedgerResult<Settings> {
        Settings::load_or_create(self.storage.paths())
    }

    fn change<F>(&self, apply: F) -> LedgerResult<Settings>
    where
        F: FnOnce(&mut Settings),
    {
        let before = self.current()?;
        let mut after = before.clone();
        apply(&mut after);

        after.save(self.storage.paths())?;
        if after != before {
            self.storage
                .log_update(EntityType::Settings, "config", None, &before, &after)?;
        }
        Ok(after)
    }

    pub fn set_language(&self, language: Language) -> LedgerResult<Settings> {
        let settings = self.change(|s| s.language = language)?;
        info!(language = %settings.language, "language changed");
        Ok(settings)
    }

    /// Change the display currency; amounts are not converted
    pub fn set_currency(&self, currency: Currency) -> LedgerResult<Settings> {
        let settings = self.change(|s| s.currency = currency)?;
        info!(currency = %settings.currency, "currency changed");
        Ok(settings)
    }

    pub fn set_theme(&self, theme: Theme) -> LedgerResult<Settings> {
        self.change(|s| s.theme = theme)
    }

    pub fn toggle_theme(&self) -> LedgerResult<Settings> {
        self.change(|s| s.theme = s.theme.toggled())
    }
}
