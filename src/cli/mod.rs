//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod config;
pub mod export;
pub mod history;

pub use account::{handle_account_command, AccountCommands};
pub use config::{handle_config_command, ConfigArgs};
pub use export::{handle_export_command, ExportFormatArg};
pub use history::handle_history_command;

use crate::audit::AuditLogger;
use crate::config::{Settings, StreamkeepPaths};
use crate::error::StreamkeepResult;
use crate::services::AccountService;
use crate::storage::open_file_store;

/// Open the on-disk account store with auditing per `settings`
pub fn open_account_service(
    paths: &StreamkeepPaths,
    settings: &Settings,
) -> StreamkeepResult<AccountService> {
    let (store, _report) = open_file_store(paths)?;
    let audit = settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()));
    Ok(AccountService::new(store, audit))
}
