//! User preference values
//!
//! Language, display currency and color theme. These are plain display
//! preferences: no conversion between currencies is ever performed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Azerbaijani
    #[default]
    Az,
    /// Russian
    Ru,
    /// English
    En,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::Az, Language::Ru, Language::En]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Az => "az",
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// Name of the language in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::Az => "Azərbaycan",
            Self::Ru => "Русский",
            Self::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "az" => Ok(Self::Az),
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(format!("Unknown language: '{}'. Use az, ru or en", other)),
        }
    }
}

/// Display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Azn,
    Usd,
    Rub,
    Try,
}

impl Currency {
    pub fn all() -> &'static [Currency] {
        &[Currency::Azn, Currency::Usd, Currency::Rub, Currency::Try]
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Azn => "AZN",
            Self::Usd => "USD",
            Self::Rub => "RUB",
            Self::Try => "TRY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Azn => "₼",
            Self::Usd => "$",
            Self::Rub => "₽",
            Self::Try => "₺",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AZN" => Ok(Self::Azn),
            "USD" => Ok(Self::Usd),
            "RUB" => Ok(Self::Rub),
            "TRY" => Ok(Self::Try),
            other => Err(format!(
                "Unknown currency: '{}'. Use AZN, USD, RUB or TRY",
                other
            )),
        }
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme: '{}'. Use light or dark", other)),
        }
    }
}
