//! Subscription account model
//!
//! One tracked subscription: service, credentials, billing date and members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use super::ids::AccountId;
use super::service::StreamingService;

/// Valid billing days of the month
pub const BILLING_DAYS: RangeInclusive<u8> = 1..=31;

/// Valid billing years
pub const BILLING_YEARS: RangeInclusive<u16> = 2024..=2030;

/// Mask shown (and logged) instead of a password
pub const PASSWORD_MASK: &str = "********";

/// Whether an account is shared or single-user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Shared account with one slot per member
    #[default]
    Group,
    /// Single-user account
    Personal,
}

impl AccountKind {
    /// Parse an account kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "group" | "shared" => Some(Self::Group),
            "personal" | "single" => Some(Self::Personal),
            _ => None,
        }
    }

    /// The other kind
    pub fn toggled(self) -> Self {
        match self {
            Self::Group => Self::Personal,
            Self::Personal => Self::Group,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group => write!(f, "Group"),
            Self::Personal => write!(f, "Personal"),
        }
    }
}

/// The user-editable fields of an account, already checked against the form
/// constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    pub service: StreamingService,
    pub kind: AccountKind,
    pub email: String,
    pub password: String,
    pub billing_day: u8,
    pub billing_year: u16,
    pub members: Vec<String>,
}

/// A tracked streaming subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionAccount {
    /// Unique identifier
    pub id: AccountId,

    pub service: StreamingService,

    #[serde(rename = "type")]
    pub kind: AccountKind,

    pub email: String,

    pub password: String,

    /// Day of the month the subscription is paid
    #[serde(rename = "day")]
    pub billing_day: u8,

    #[serde(rename = "year")]
    pub billing_year: u16,

    /// Member display names, one per slot
    pub members: Vec<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl SubscriptionAccount {
    /// Create a new account with a fresh ID
    pub fn new(details: AccountDetails) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            service: details.service,
            kind: details.kind,
            email: details.email,
            password: details.password,
            billing_day: details.billing_day,
            billing_year: details.billing_year,
            members: details.members,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields, keeping the ID and creation time
    pub fn apply(&mut self, details: AccountDetails) {
        self.service = details.service;
        self.kind = details.kind;
        self.email = details.email;
        self.password = details.password;
        self.billing_day = details.billing_day;
        self.billing_year = details.billing_year;
        self.members = details.members;
        self.updated_at = Utc::now();
    }

    /// Copy with the password replaced by a mask, for logs and audit entries
    pub fn redacted(&self) -> Self {
        Self {
            password: PASSWORD_MASK.to_string(),
            ..self.clone()
        }
    }

    /// Label used in audit entries and status messages
    pub fn label(&self) -> String {
        format!("{} ({})", self.service, self.email)
    }

    /// Human-readable billing date
    pub fn billing_label(&self) -> String {
        format!("Day {}, {}", self.billing_day, self.billing_year)
    }
}

impl fmt::Display for SubscriptionAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.service, self.kind, self.email)
    }
}

/// Check an email the way an `type="email"` input would: one `@`, a non-empty
/// local part, a non-empty domain, no whitespace
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
