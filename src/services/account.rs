//! Account service
//!
//! Business logic over the account collection: lookups by full or short ID,
//! and create/update/delete with an audit trail.

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{StreamkeepError, StreamkeepResult};
use crate::models::{AccountDetails, AccountId, SubscriptionAccount};
use crate::storage::AccountStore;

/// Service for subscription account management
pub struct AccountService {
    store: AccountStore,
    audit: Option<AuditLogger>,
}

impl AccountService {
    /// Create a service over `store`; pass an audit logger to record changes
    pub fn new(store: AccountStore, audit: Option<AuditLogger>) -> Self {
        Self { store, audit }
    }

    /// All accounts in collection order
    pub fn accounts(&self) -> &[SubscriptionAccount] {
        self.store.all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> Option<&SubscriptionAccount> {
        self.store.get(id)
    }

    /// Find an account by full ID or by a unique ID prefix (`sub-1a2b` or `1a2b`)
    pub fn find(&self, identifier: &str) -> StreamkeepResult<&SubscriptionAccount> {
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<AccountId>() {
            return self
                .store
                .get(id)
                .ok_or_else(|| StreamkeepError::account_not_found(identifier));
        }

        let mut matches = self
            .store
            .all()
            .iter()
            .filter(|a| a.id.matches_prefix(identifier));

        match (matches.next(), matches.count()) {
            (Some(account), 0) => Ok(account),
            (Some(_), rest) => Err(StreamkeepError::Ambiguous {
                identifier: identifier.to_string(),
                count: rest + 1,
            }),
            (None, _) => Err(StreamkeepError::account_not_found(identifier)),
        }
    }

    /// Append a new account built from `details`
    pub fn create(&mut self, details: AccountDetails) -> StreamkeepResult<SubscriptionAccount> {
        let account = SubscriptionAccount::new(details);
        self.store.add(account.clone())?;

        info!(id = %account.id, service = account.service.key(), "account created");
        self.record(AuditEntry::create(
            EntityType::Account,
            account.id.to_string(),
            Some(account.label()),
            &account.redacted(),
        ));

        Ok(account)
    }

    /// Overwrite the editable fields of an existing account in place
    pub fn update(
        &mut self,
        id: AccountId,
        details: AccountDetails,
    ) -> StreamkeepResult<SubscriptionAccount> {
        let mut account = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| StreamkeepError::account_not_found(id.to_string()))?;
        account.apply(details);

        let previous = self.store.replace(account.clone())?;

        info!(id = %account.id, "account updated");
        self.record(AuditEntry::update(
            EntityType::Account,
            account.id.to_string(),
            Some(account.label()),
            &previous.redacted(),
            &account.redacted(),
        ));

        Ok(account)
    }

    /// Remove an account, returning it
    pub fn delete(&mut self, id: AccountId) -> StreamkeepResult<SubscriptionAccount> {
        let removed = self.store.remove(id)?;

        info!(id = %removed.id, "account deleted");
        self.record(AuditEntry::delete(
            EntityType::Account,
            removed.id.to_string(),
            Some(removed.label()),
            &removed.redacted(),
        ));

        Ok(removed)
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// The underlying collection store
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    // The change is already persisted at this point, so a failed audit write
    // must not turn it into an error.
    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{AccountKind, StreamingService, PASSWORD_MASK};
    use crate::storage::{serialize_accounts, MemoryStore, STORAGE_KEY};
    use tempfile::TempDir;

    fn create_test_service() -> (AccountService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = AccountStore::load(Box::new(MemoryStore::new())).unwrap();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        (AccountService::new(store, Some(audit)), temp_dir)
    }

    fn details(email: &str) -> AccountDetails {
        AccountDetails {
            service: StreamingService::Netflix,
            kind: AccountKind::Group,
            email: email.to_string(),
            password: "hunter2".to_string(),
            billing_day: 12,
            billing_year: 2025,
            members: vec!["Ana".into(), "Bo".into(), "Cy".into(), "Di".into(), "Ed".into()],
        }
    }

    #[test]
    fn test_create_and_get() {
        let (mut service, _temp) = create_test_service();

        let account = service.create(details("a@x.io")).unwrap();

        assert_eq!(service.len(), 1);
        assert_eq!(service.get(account.id), Some(&account));
    }

    #[test]
    fn test_update_replaces_only_target() {
        let (mut service, _temp) = create_test_service();
        let a = service.create(details("a@x.io")).unwrap();
        let b = service.create(details("b@x.io")).unwrap();

        let updated = service.update(a.id, details("a2@x.io")).unwrap();

        assert_eq!(updated.id, a.id);
        assert_eq!(updated.created_at, a.created_at);
        let emails: Vec<_> = service.accounts().iter().map(|a| a.email.as_str()).collect();
        assert_eq!(emails, ["a2@x.io", "b@x.io"]);
        assert_eq!(service.get(b.id), Some(&b));
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let (mut service, _temp) = create_test_service();
        let err = service.update(AccountId::new(), details("a@x.io")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_leaves_empty_array_in_backend() {
        let (mut service, _temp) = create_test_service();
        let account = service.create(details("a@x.io")).unwrap();

        let removed = service.delete(account.id).unwrap();

        assert_eq!(removed.id, account.id);
        assert!(service.is_empty());
        assert_eq!(
            service.store().backend().get(STORAGE_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_find_by_full_and_short_id() {
        let (mut service, _temp) = create_test_service();
        let account = service.create(details("a@x.io")).unwrap();

        let full = account.id.as_uuid().to_string();
        assert_eq!(service.find(&full).unwrap().id, account.id);
        assert_eq!(service.find(&account.id.to_string()).unwrap().id, account.id);
        assert_eq!(service.find(&full[..4]).unwrap().id, account.id);
    }

    #[test]
    fn test_find_unknown_and_ambiguous() {
        let mut first = SubscriptionAccount::new(details("a@x.io"));
        first.id = AccountId::parse("abcd0000-0000-4000-8000-000000000001").unwrap();
        let mut second = SubscriptionAccount::new(details("b@x.io"));
        second.id = AccountId::parse("abcd1111-0000-4000-8000-000000000002").unwrap();
        let payload = serialize_accounts(&[first, second]).unwrap();
        let (store, _) =
            AccountStore::load(Box::new(MemoryStore::new().with_entry(STORAGE_KEY, payload)))
                .unwrap();
        let service = AccountService::new(store, None);

        assert!(service.find("sub-ffff").unwrap_err().is_not_found());
        // An empty prefix matches nothing rather than everything
        assert!(service.find("sub-").unwrap_err().is_not_found());

        match service.find("sub-abcd") {
            Err(StreamkeepError::Ambiguous { count, .. }) => assert_eq!(count, 2),
            other => panic!("expected ambiguous match, got {:?}", other),
        }
        assert_eq!(service.find("abcd1").unwrap().email, "b@x.io");
    }

    #[test]
    fn test_audit_trail_redacts_passwords() {
        let (mut service, _temp) = create_test_service();
        let account = service.create(details("a@x.io")).unwrap();
        service.update(account.id, details("b@x.io")).unwrap();
        service.delete(account.id).unwrap();

        let entries = service.audit().unwrap().read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, [Operation::Create, Operation::Update, Operation::Delete]);

        let raw = std::fs::read_to_string(service.audit().unwrap().path()).unwrap();
        assert!(!raw.contains("hunter2"));
        assert!(raw.contains(PASSWORD_MASK));
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("email: \"a@x.io\" -> \"b@x.io\"")
        );
    }

    #[test]
    fn test_audit_disabled() {
        let (store, _) = AccountStore::load(Box::new(MemoryStore::new())).unwrap();
        let mut service = AccountService::new(store, None);
        service.create(details("a@x.io")).unwrap();
        assert!(service.audit().is_none());
    }
}
