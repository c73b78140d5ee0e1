//! Configuration module for Pocketbook
//!
//! - Data directory resolution
//! - User preference persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
