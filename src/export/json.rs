//! JSON export
//!
//! Writes the collection with a schema version and a small metadata block.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StreamkeepError, StreamkeepResult};
use crate::models::{AccountKind, SubscriptionAccount};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub accounts: Vec<SubscriptionAccount>,

    pub metadata: ExportMetadata,
}

/// Counts for a quick look at an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub account_count: usize,
    pub group_count: usize,
    pub personal_count: usize,
}

impl AccountExport {
    pub fn new(accounts: &[SubscriptionAccount]) -> Self {
        let personal_count = accounts
            .iter()
            .filter(|a| a.kind == AccountKind::Personal)
            .count();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            accounts: accounts.to_vec(),
            metadata: ExportMetadata {
                account_count: accounts.len(),
                group_count: accounts.len() - personal_count,
                personal_count,
            },
        }
    }
}

/// Export the collection as pretty-printed JSON
pub fn export_json<W: Write>(accounts: &[SubscriptionAccount], writer: &mut W) -> StreamkeepResult<()> {
    let export = AccountExport::new(accounts);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| StreamkeepError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| StreamkeepError::Export(e.to_string()))?;
    Ok(())
}
