//! Pocketbook - local personal-finance tracker
//!
//! This library provides the core functionality for the Pocketbook
//! application: recording income and expenses, tracking savings goals and
//! debts, and summarizing them by month and category. All data lives in
//! local JSON files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, goals, debts, money, categories)
//! - `storage`: JSON collection files with atomic writes
//! - `services`: Business logic layer (validation, clamping, audit)
//! - `reports`: Pure aggregations (balances, monthly stats, progress)
//! - `audit`: Audit logging system
//! - `export`: JSON, YAML and CSV export
//! - `i18n`: Localized labels, category and month names
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::config::{paths::LedgerPaths, settings::Settings};
//! use pocketbook::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod i18n;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
