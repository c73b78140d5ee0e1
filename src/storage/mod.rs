//! Storage layer for Pocketbook
//!
//! Three independent JSON collections (transactions, goals, debts) with
//! atomic writes, plus the audit log every mutation is recorded in.

pub mod collection;
pub mod file_io;
pub mod records;

pub use collection::Collection;
pub use file_io::{read_json, write_json_atomic};
pub use records::{Patchable, Record};

use serde::Serialize;
use tracing::info;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::{Debt, Goal, Transaction};

/// Main storage coordinator that provides access to all collections
pub struct Storage {
    paths: LedgerPaths,
    pub transactions: Collection<Transaction>,
    pub goals: Collection<Goal>,
    pub debts: Collection<Debt>,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: Collection::new(paths.transactions_file()),
            goals: Collection::new(paths.goals_file()),
            debts: Collection::new(paths.debts_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Check if storage has been initialized (settings were saved)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Empty all three collections
    ///
    /// Preferences in `config.json` are kept. Nothing is cleared when any
    /// collection file is corrupt.
    pub fn clear_all(&self) -> LedgerResult<()> {
        self.transactions.load()?;
        self.goals.load()?;
        self.debts.load()?;

        let cleared = [
            (EntityType::Transaction, self.transactions.clear()?),
            (EntityType::Goal, self.goals.clear()?),
            (EntityType::Debt, self.debts.clear()?),
        ];

        let entries: Vec<AuditEntry> = cleared
            .iter()
            .map(|(entity_type, count)| AuditEntry::clear(*entity_type, *count))
            .collect();
        self.audit.log_batch(&entries)?;

        info!(
            transactions = cleared[0].1,
            goals = cleared[1].1,
            debts = cleared[2].1,
            "all collections cleared"
        );
        Ok(())
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> LedgerResult<()> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Log an update, attaching a field diff of the two snapshots
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> LedgerResult<()> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        let entry = AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff);
        self.audit.log(&entry)
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> LedgerResult<()> {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }
}
