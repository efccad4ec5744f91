//! Display formatting for terminal output
//!
//! Plain-text tables and detail cards for the CLI, plus the personal/group
//! partition both the CLI and the TUI lay accounts out by.

pub mod account;
pub mod partition;
pub mod service;

pub use account::{display_password, format_account_details, format_account_list, format_members};
pub use partition::Partition;
pub use service::format_service_table;
