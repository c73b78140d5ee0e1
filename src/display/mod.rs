//! Display formatting for terminal output
//!
//! Renders records and summaries in the user's language and currency.

pub mod dashboard;
pub mod debt;
pub mod goal;
pub mod report;
pub mod transaction;

pub use dashboard::format_dashboard;
pub use debt::{format_debt_details, format_debt_list};
pub use goal::{format_goal_details, format_goal_list};
pub use transaction::{format_category_list, format_transaction_details, format_transaction_list};

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::i18n::{self, Labels};
use crate::models::{Currency, Language};

/// Language, currency and reference date used when rendering
#[derive(Debug, Clone, Copy)]
pub struct DisplayContext {
    pub language: Language,
    pub currency: Currency,
    /// Date that overdue checks are made against
    pub today: NaiveDate,
}

impl DisplayContext {
    pub fn new(language: Language, currency: Currency, today: NaiveDate) -> Self {
        Self {
            language,
            currency,
            today,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.language, settings.currency, Local::now().date_naive())
    }

    pub fn labels(&self) -> &'static Labels {
        i18n::labels(self.language)
    }

    pub fn symbol(&self) -> &'static str {
        self.currency.symbol()
    }
}
