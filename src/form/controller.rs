//! Form controller
//!
//! Drives the create/edit form: which record (if any) is being edited, the
//! draft being filled in, and the account kind to preselect next time.

use chrono::{Datelike, Local};
use tracing::debug;

use crate::error::{StreamkeepError, StreamkeepResult};
use crate::models::{AccountId, AccountKind, StreamingService, SubscriptionAccount};
use crate::services::AccountService;

use super::draft::Draft;

/// State of the account form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    /// Filling in a new account
    Creating(Draft),
    /// Changing the account with this ID
    Editing(AccountId, Draft),
}

/// What a successful submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(SubscriptionAccount),
    Updated(SubscriptionAccount),
}

impl SubmitOutcome {
    pub fn account(&self) -> &SubscriptionAccount {
        match self {
            Self::Created(account) | Self::Updated(account) => account,
        }
    }
}

/// Form state machine over an [`AccountService`]
#[derive(Debug, Clone)]
pub struct FormController {
    state: FormState,
    last_kind: AccountKind,
    default_year: i32,
}

impl FormController {
    /// Closed form; new drafts prefill the current calendar year
    pub fn new(default_kind: AccountKind) -> Self {
        Self::with_year(default_kind, Local::now().year())
    }

    /// Closed form with a fixed year for new drafts
    pub fn with_year(default_kind: AccountKind, default_year: i32) -> Self {
        Self {
            state: FormState::Closed,
            last_kind: default_kind,
            default_year,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, FormState::Closed)
    }

    /// The draft being edited, if the form is open
    pub fn draft(&self) -> Option<&Draft> {
        match &self.state {
            FormState::Closed => None,
            FormState::Creating(draft) | FormState::Editing(_, draft) => Some(draft),
        }
    }

    /// ID of the record being edited
    pub fn editing_id(&self) -> Option<AccountId> {
        match self.state {
            FormState::Editing(id, _) => Some(id),
            _ => None,
        }
    }

    /// Kind preselected for the next new draft
    pub fn last_kind(&self) -> AccountKind {
        self.last_kind
    }

    /// Open a blank form. Does nothing if the form is already open.
    pub fn open_create(&mut self) {
        if self.is_open() {
            return;
        }
        self.state = FormState::Creating(Draft::empty(self.last_kind, self.default_year));
    }

    /// Load `account` into the form, replacing whatever was open
    pub fn open_edit(&mut self, account: &SubscriptionAccount) {
        debug!(id = %account.id, "editing account");
        self.last_kind = account.kind;
        self.state = FormState::Editing(account.id, Draft::from_account(account));
    }

    /// Change the draft's kind
    ///
    /// The member slots are left alone; they are only resized when a service
    /// is (re)selected.
    pub fn set_kind(&mut self, kind: AccountKind) -> StreamkeepResult<()> {
        self.draft_mut()?.kind = kind;
        self.last_kind = kind;
        Ok(())
    }

    pub fn toggle_kind(&mut self) -> StreamkeepResult<()> {
        let kind = self.draft_mut()?.kind.toggled();
        self.set_kind(kind)
    }

    /// Select a service, resetting the member slots to its capacity
    pub fn select_service(&mut self, service: StreamingService) -> StreamkeepResult<()> {
        self.draft_mut()?.select_service(service);
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> StreamkeepResult<()> {
        self.draft_mut()?.email = email.into();
        Ok(())
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> StreamkeepResult<()> {
        self.draft_mut()?.password = password.into();
        Ok(())
    }

    pub fn set_billing_day(&mut self, day: impl Into<String>) -> StreamkeepResult<()> {
        self.draft_mut()?.billing_day = day.into();
        Ok(())
    }

    pub fn set_billing_year(&mut self, year: impl Into<String>) -> StreamkeepResult<()> {
        self.draft_mut()?.billing_year = year.into();
        Ok(())
    }

    /// Set the name in member slot `slot`
    pub fn set_member(&mut self, slot: usize, name: impl Into<String>) -> StreamkeepResult<()> {
        let draft = self.draft_mut()?;
        let count = draft.members.len();
        let member = draft.members.get_mut(slot).ok_or_else(|| {
            StreamkeepError::Validation(format!(
                "Member slot {} does not exist ({} slots)",
                slot + 1,
                count
            ))
        })?;
        *member = name.into();
        Ok(())
    }

    /// Validate the draft and commit it
    ///
    /// A new draft is appended; an edited one replaces the record it was
    /// loaded from. On success the form closes. On failure the form stays
    /// open with the draft untouched.
    pub fn submit(&mut self, service: &mut AccountService) -> StreamkeepResult<SubmitOutcome> {
        let outcome = match &self.state {
            FormState::Closed => return Err(StreamkeepError::FormClosed),
            FormState::Creating(draft) => SubmitOutcome::Created(service.create(draft.build()?)?),
            FormState::Editing(id, draft) => {
                SubmitOutcome::Updated(service.update(*id, draft.build()?)?)
            }
        };

        self.state = FormState::Closed;
        Ok(outcome)
    }

    /// Close the form without saving
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }

    /// Delete the account `id` once `confirm` agrees
    ///
    /// Returns the removed account, or `None` if the user declined. If the
    /// account was open in the form, the form is closed.
    pub fn delete<F>(
        &mut self,
        service: &mut AccountService,
        id: AccountId,
        confirm: F,
    ) -> StreamkeepResult<Option<SubscriptionAccount>>
    where
        F: FnOnce(&SubscriptionAccount) -> bool,
    {
        let account = service
            .get(id)
            .ok_or_else(|| StreamkeepError::account_not_found(id.to_string()))?;

        if !confirm(account) {
            debug!(id = %id, "delete declined");
            return Ok(None);
        }

        let removed = service.delete(id)?;
        if self.editing_id() == Some(id) {
            self.state = FormState::Closed;
        }
        Ok(Some(removed))
    }

    fn draft_mut(&mut self) -> StreamkeepResult<&mut Draft> {
        match &mut self.state {
            FormState::Closed => Err(StreamkeepError::FormClosed),
            FormState::Creating(draft) | FormState::Editing(_, draft) => Ok(draft),
        }
    }
}
