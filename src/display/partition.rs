//! Split the collection into personal and group accounts

use crate::models::{AccountKind, SubscriptionAccount};

/// Accounts grouped by kind, each group in collection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub personal: Vec<&'a SubscriptionAccount>,
    pub group: Vec<&'a SubscriptionAccount>,
}

impl<'a> Partition<'a> {
    /// Group `accounts` by kind. Every account lands in exactly one group.
    pub fn of(accounts: &'a [SubscriptionAccount]) -> Self {
        let (personal, group) = accounts
            .iter()
            .partition(|account| account.kind == AccountKind::Personal);
        Self { personal, group }
    }

    /// The group holding accounts of `kind`
    pub fn for_kind(&self, kind: AccountKind) -> &[&'a SubscriptionAccount] {
        match kind {
            AccountKind::Personal => &self.personal,
            AccountKind::Group => &self.group,
        }
    }

    pub fn len(&self) -> usize {
        self.personal.len() + self.group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
