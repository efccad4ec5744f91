//! Account collection store
//!
//! Holds the ordered list of subscription accounts for the session and writes
//! the whole list back to the key-value backend after every mutation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{StreamkeepError, StreamkeepResult};
use crate::models::{
    AccountId, AccountKind, StreamingService, SubscriptionAccount, BILLING_DAYS, BILLING_YEARS,
};

use super::kv::KeyValueStore;

/// Key the collection is stored under
pub const STORAGE_KEY: &str = "streamingGroups";

/// Outcome of reading the persisted collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Entries kept, including migrated ones
    pub loaded: usize,
    /// Entries that needed an ID assigned or fields converted
    pub migrated: usize,
    /// Entries dropped because they did not match the record shape
    pub discarded: usize,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.migrated == 0 && self.discarded == 0
    }
}

/// Ordered collection of accounts backed by a key-value store
pub struct AccountStore {
    backend: Box<dyn KeyValueStore>,
    accounts: Vec<SubscriptionAccount>,
}

impl AccountStore {
    /// Load the collection from `backend`
    ///
    /// A missing key gives an empty collection. A payload that cannot be read
    /// as an array of accounts is treated the same way, with a warning; bad
    /// entries inside an otherwise valid array are dropped one by one. Only a
    /// backend read failure is an error.
    pub fn load(backend: Box<dyn KeyValueStore>) -> StreamkeepResult<(Self, LoadReport)> {
        let (accounts, report) = match backend.get(STORAGE_KEY)? {
            Some(payload) => deserialize_accounts(&payload),
            None => {
                debug!("no stored accounts, starting empty");
                (Vec::new(), LoadReport::default())
            }
        };

        if !report.is_clean() {
            warn!(
                migrated = report.migrated,
                discarded = report.discarded,
                "stored accounts needed repair"
            );
        }
        info!(count = report.loaded, "accounts loaded");

        Ok((Self { backend, accounts }, report))
    }

    /// All accounts in collection order
    pub fn all(&self) -> &[SubscriptionAccount] {
        &self.accounts
    }

    pub fn get(&self, id: AccountId) -> Option<&SubscriptionAccount> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Position of the account in the collection
    pub fn position(&self, id: AccountId) -> Option<usize> {
        self.accounts.iter().position(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Append an account and persist
    ///
    /// The collection is only changed once the write has succeeded.
    pub fn add(&mut self, account: SubscriptionAccount) -> StreamkeepResult<()> {
        if self.get(account.id).is_some() {
            return Err(StreamkeepError::Storage(format!(
                "Account {} already exists",
                account.id
            )));
        }
        let mut candidate = self.accounts.clone();
        candidate.push(account);
        self.commit(candidate)
    }

    /// Replace the account with the same ID in place and persist
    ///
    /// Returns the previous version.
    pub fn replace(&mut self, account: SubscriptionAccount) -> StreamkeepResult<SubscriptionAccount> {
        let index = self
            .position(account.id)
            .ok_or_else(|| StreamkeepError::account_not_found(account.id.to_string()))?;
        let mut candidate = self.accounts.clone();
        let previous = std::mem::replace(&mut candidate[index], account);
        self.commit(candidate)?;
        Ok(previous)
    }

    /// Remove an account and persist, keeping the order of the rest
    pub fn remove(&mut self, id: AccountId) -> StreamkeepResult<SubscriptionAccount> {
        let index = self
            .position(id)
            .ok_or_else(|| StreamkeepError::account_not_found(id.to_string()))?;
        let mut candidate = self.accounts.clone();
        let removed = candidate.remove(index);
        self.commit(candidate)?;
        Ok(removed)
    }

    /// The backend the collection is written to
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Write `candidate` to the backend, then make it the collection
    fn commit(&mut self, candidate: Vec<SubscriptionAccount>) -> StreamkeepResult<()> {
        let payload = serialize_accounts(&candidate)?;
        self.backend.set(STORAGE_KEY, &payload)?;
        self.accounts = candidate;
        debug!(count = self.accounts.len(), "accounts persisted");
        Ok(())
    }
}

/// Serialize the collection to the stored JSON array
pub fn serialize_accounts(accounts: &[SubscriptionAccount]) -> StreamkeepResult<String> {
    Ok(serde_json::to_string(accounts)?)
}

/// Parse a stored payload, validating each entry
pub fn deserialize_accounts(payload: &str) -> (Vec<SubscriptionAccount>, LoadReport) {
    let mut report = LoadReport::default();

    let entries = match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(serde_json::Value::Array(entries)) => entries,
        Ok(other) => {
            warn!(kind = json_kind(&other), "stored accounts are not an array, ignoring");
            return (Vec::new(), report);
        }
        Err(e) => {
            warn!(error = %e, "stored accounts are not valid JSON, ignoring");
            return (Vec::new(), report);
        }
    };

    let mut accounts = Vec::with_capacity(entries.len());
    let mut seen = HashSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let parsed = serde_json::from_value::<StoredAccount>(entry)
            .map_err(|e| e.to_string())
            .and_then(StoredAccount::into_account);

        match parsed {
            Ok((mut account, mut migrated)) => {
                if !seen.insert(account.id) {
                    account.id = AccountId::new();
                    migrated = true;
                }
                if migrated {
                    report.migrated += 1;
                }
                accounts.push(account);
            }
            Err(reason) => {
                warn!(index, %reason, "discarding stored account");
                report.discarded += 1;
            }
        }
    }

    report.loaded = accounts.len();
    (accounts, report)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// A stored entry as found on disk, before validation
///
/// Older payloads carry no ID or timestamps and keep day/year as strings.
#[derive(Debug, Deserialize)]
struct StoredAccount {
    #[serde(default)]
    id: Option<AccountId>,
    service: String,
    #[serde(rename = "type")]
    kind: String,
    email: String,
    password: String,
    day: NumberOrText,
    year: NumberOrText,
    members: Vec<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    /// The integer value, and whether it had to be converted from text
    fn resolve(&self, field: &str) -> Result<(i64, bool), String> {
        match self {
            Self::Number(n) => Ok((*n, false)),
            Self::Text(s) => s
                .trim()
                .parse()
                .map(|n| (n, true))
                .map_err(|_| format!("{} is not a number: '{}'", field, s)),
        }
    }
}

impl StoredAccount {
    fn into_account(self) -> Result<(SubscriptionAccount, bool), String> {
        let service = StreamingService::parse(&self.service)
            .ok_or_else(|| format!("unknown service '{}'", self.service))?;
        let kind = AccountKind::parse(&self.kind)
            .ok_or_else(|| format!("unknown account type '{}'", self.kind))?;

        let (day, day_converted) = self.day.resolve("day")?;
        let billing_day = u8::try_from(day)
            .ok()
            .filter(|d| BILLING_DAYS.contains(d))
            .ok_or_else(|| format!("day {} out of range", day))?;

        let (year, year_converted) = self.year.resolve("year")?;
        let billing_year = u16::try_from(year)
            .ok()
            .filter(|y| BILLING_YEARS.contains(y))
            .ok_or_else(|| format!("year {} out of range", year))?;

        let migrated = self.id.is_none()
            || self.created_at.is_none()
            || self.updated_at.is_none()
            || day_converted
            || year_converted;

        let now = Utc::now();
        let created_at = self.created_at.unwrap_or(now);
        let account = SubscriptionAccount {
            id: self.id.unwrap_or_default(),
            service,
            kind,
            email: self.email,
            password: self.password,
            billing_day,
            billing_year,
            members: self.members,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        };

        Ok((account, migrated))
    }
}
