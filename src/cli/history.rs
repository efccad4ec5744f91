//! CLI command for the audit history

use crate::error::StreamkeepResult;
use crate::services::AccountService;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(service: &AccountService, limit: usize) -> StreamkeepResult<()> {
    let Some(audit) = service.audit() else {
        println!("Audit logging is disabled. Enable it with 'streamkeep config --audit true'.");
        return Ok(());
    };

    let entries = audit.read_recent(limit)?;
    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
