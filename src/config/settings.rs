//! User settings for Pocketbook
//!
//! Persists the display preferences (language, currency, theme) in
//! `config.json`. Unknown or corrupt preference values fall back to their
//! defaults instead of failing the whole load.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{Currency, Language, Theme};

/// User settings for Pocketbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default, deserialize_with = "lenient")]
    pub language: Language,

    #[serde(default, deserialize_with = "lenient")]
    pub currency: Currency,

    #[serde(default, deserialize_with = "lenient")]
    pub theme: Theme,
}

fn default_schema_version() -> u32 {
    1
}

/// Accept any string; keep the default when it does not parse
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            language: Language::default(),
            currency: Currency::default(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Symbol of the preferred currency
    pub fn currency_symbol(&self) -> &'static str {
        self.currency.symbol()
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
