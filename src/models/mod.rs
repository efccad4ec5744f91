//! Core data models for streamkeep
//!
//! Subscription accounts, the streaming service table and typed IDs.

pub mod account;
pub mod ids;
pub mod service;

pub use account::{
    is_plausible_email, AccountDetails, AccountKind, SubscriptionAccount, BILLING_DAYS,
    BILLING_YEARS, PASSWORD_MASK,
};
pub use ids::AccountId;
pub use service::{ServiceConfig, StreamingService};
