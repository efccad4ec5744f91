//! Dialog modules for the TUI
//!
//! Contains modal dialogs for various operations

pub mod account_form;
pub mod confirm;
pub mod help;
