//! streamkeep - terminal tracker for shared and personal streaming subscriptions
//!
//! Keeps a list of streaming accounts (service, login, billing date and the
//! people sharing each one) in a local JSON store, with an interactive TUI
//! and a scriptable CLI on top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data paths and user settings
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Accounts, the streaming service table and IDs
//! - `storage`: Key-value backends and the account collection store
//! - `audit`: Append-only audit log of account changes
//! - `services`: Business logic over the store
//! - `form`: Create/edit form state machine
//! - `display`: Plain-text formatting and the personal/group partition
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use streamkeep::config::{Settings, StreamkeepPaths};
//! use streamkeep::cli::open_account_service;
//!
//! let paths = StreamkeepPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let service = open_account_service(&paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod form;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{StreamkeepError, StreamkeepResult};
