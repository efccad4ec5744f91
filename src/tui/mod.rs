//! Terminal User Interface module
//!
//! Interactive card view of all accounts, split into personal and group
//! columns, with a modal form for creating and editing accounts.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
