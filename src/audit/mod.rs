//! Audit logging for streamkeep
//!
//! Records every create, update and delete of an account with before/after
//! snapshots in an append-only JSONL file. Snapshots are taken from redacted
//! accounts, so passwords never reach the log.
//!
//! - `AuditEntry`: one operation with timestamp, entity and optional states
//! - `AuditLogger`: appends entries to the log file and reads them back
//! - `generate_diff`: field-level summary of an update

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
