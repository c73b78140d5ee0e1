//! Audit trail for ledger mutations
//!
//! Every create, update and delete on the three collections, plus bulk
//! clears and preference changes, is appended to `audit.log` as a JSON line
//! carrying before/after snapshots.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: the JSONL writer/reader
//! - `generate_diff`: a one-line summary of changed fields

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
