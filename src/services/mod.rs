//! Service layer for streamkeep
//!
//! The service layer sits on top of the storage layer and adds lookups by
//! short ID and the audit trail.

pub mod account;

pub use account::AccountService;
