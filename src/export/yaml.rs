//! YAML export
//!
//! Same document as the JSON export, for reading by eye.

use std::io::Write;

use crate::error::{StreamkeepError, StreamkeepResult};
use crate::models::SubscriptionAccount;

use super::json::AccountExport;

/// Export the collection as YAML
pub fn export_yaml<W: Write>(accounts: &[SubscriptionAccount], writer: &mut W) -> StreamkeepResult<()> {
    let export = AccountExport::new(accounts);
    let header = |e: std::io::Error| StreamkeepError::Export(e.to_string());

    writeln!(writer, "# streamkeep account export").map_err(header)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(header)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(header)?;
    writeln!(writer, "#").map_err(header)?;
    writeln!(writer, "# Passwords are stored in clear text. Keep this file private.").map_err(header)?;
    writeln!(writer).map_err(header)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| StreamkeepError::Export(e.to_string()))?;

    Ok(())
}
