//! Form draft
//!
//! The in-progress field values of the account form. Numbers are kept as the
//! text the user typed so a half-entered day or year can be shown back as is;
//! they are only parsed when the draft is built.

use crate::error::{StreamkeepError, StreamkeepResult};
use crate::models::{
    is_plausible_email, AccountDetails, AccountKind, StreamingService, SubscriptionAccount,
    BILLING_DAYS, BILLING_YEARS,
};

/// Field values of the account form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub kind: AccountKind,
    pub service: Option<StreamingService>,
    pub email: String,
    pub password: String,
    pub billing_day: String,
    pub billing_year: String,
    pub members: Vec<String>,
}

impl Draft {
    /// A blank draft: no service, no members, empty day, `year` prefilled
    pub fn empty(kind: AccountKind, year: i32) -> Self {
        Self {
            kind,
            service: None,
            email: String::new(),
            password: String::new(),
            billing_day: String::new(),
            billing_year: year.to_string(),
            members: Vec::new(),
        }
    }

    /// Load every field of an existing account
    pub fn from_account(account: &SubscriptionAccount) -> Self {
        Self {
            kind: account.kind,
            service: Some(account.service),
            email: account.email.clone(),
            password: account.password.clone(),
            billing_day: account.billing_day.to_string(),
            billing_year: account.billing_year.to_string(),
            members: account.members.clone(),
        }
    }

    /// Set the service and reset the member slots to its capacity for the
    /// current kind. Names already entered are discarded.
    pub fn select_service(&mut self, service: StreamingService) {
        self.service = Some(service);
        self.members = vec![String::new(); service.member_capacity(self.kind)];
    }

    /// Check the form constraints and produce the account fields
    pub fn build(&self) -> StreamkeepResult<AccountDetails> {
        let service = self
            .service
            .ok_or_else(|| StreamkeepError::Validation("Select a streaming service".into()))?;

        let email = self.email.trim();
        if email.is_empty() {
            return Err(StreamkeepError::Validation("Email is required".into()));
        }
        if !is_plausible_email(email) {
            return Err(StreamkeepError::Validation(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        if self.password.is_empty() {
            return Err(StreamkeepError::Validation("Password is required".into()));
        }

        let billing_day = self
            .billing_day
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|day| BILLING_DAYS.contains(day))
            .ok_or_else(|| {
                StreamkeepError::Validation(format!(
                    "Billing day must be between {} and {}",
                    BILLING_DAYS.start(),
                    BILLING_DAYS.end()
                ))
            })?;

        let billing_year = self
            .billing_year
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|year| BILLING_YEARS.contains(year))
            .ok_or_else(|| {
                StreamkeepError::Validation(format!(
                    "Billing year must be between {} and {}",
                    BILLING_YEARS.start(),
                    BILLING_YEARS.end()
                ))
            })?;

        if let Some(slot) = self.members.iter().position(|m| m.trim().is_empty()) {
            return Err(StreamkeepError::Validation(format!(
                "Member {} needs a name",
                slot + 1
            )));
        }

        Ok(AccountDetails {
            service,
            kind: self.kind,
            email: email.to_string(),
            password: self.password.clone(),
            billing_day,
            billing_year,
            members: self.members.iter().map(|m| m.trim().to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(service: StreamingService, kind: AccountKind) -> Draft {
        let mut draft = Draft::empty(kind, 2025);
        draft.select_service(service);
        draft.email = "a@x.io".into();
        draft.password = "pw".into();
        draft.billing_day = "12".into();
        for (i, slot) in draft.members.iter_mut().enumerate() {
            *slot = format!("Member {}", i + 1);
        }
        draft
    }

    #[test]
    fn test_empty_draft() {
        let draft = Draft::empty(AccountKind::Personal, 2026);
        assert_eq!(draft.kind, AccountKind::Personal);
        assert!(draft.service.is_none());
        assert!(draft.members.is_empty());
        assert_eq!(draft.billing_day, "");
        assert_eq!(draft.billing_year, "2026");
    }

    #[test]
    fn test_select_service_sizes_members() {
        let mut draft = Draft::empty(AccountKind::Group, 2025);
        draft.select_service(StreamingService::Netflix);
        assert_eq!(draft.members, vec![String::new(); 5]);

        draft.members[0] = "Ana".into();
        draft.select_service(StreamingService::Paramount);
        assert_eq!(draft.members, vec![String::new(); 6]);

        draft.kind = AccountKind::Personal;
        draft.select_service(StreamingService::Spotify);
        assert_eq!(draft.members.len(), 1);
    }

    #[test]
    fn test_build_valid() {
        let details = filled(StreamingService::Hbo, AccountKind::Group).build().unwrap();
        assert_eq!(details.service, StreamingService::Hbo);
        assert_eq!(details.billing_day, 12);
        assert_eq!(details.billing_year, 2025);
        assert_eq!(details.members.len(), 5);
    }

    #[test]
    fn test_build_trims_email_and_members() {
        let mut draft = filled(StreamingService::Prime, AccountKind::Personal);
        draft.email = "  a@x.io ".into();
        draft.members[0] = " Ana ".into();
        let details = draft.build().unwrap();
        assert_eq!(details.email, "a@x.io");
        assert_eq!(details.members, ["Ana"]);
    }

    #[test]
    fn test_build_rejects_each_constraint() {
        let base = filled(StreamingService::Netflix, AccountKind::Group);

        let mut no_service = base.clone();
        no_service.service = None;

        let mut bad_email = base.clone();
        bad_email.email = "not-an-email".into();

        let mut blank_email = base.clone();
        blank_email.email = "   ".into();

        let mut no_password = base.clone();
        no_password.password.clear();

        let mut bad_day = base.clone();
        bad_day.billing_day = "32".into();

        let mut zero_day = base.clone();
        zero_day.billing_day = "0".into();

        let mut bad_year = base.clone();
        bad_year.billing_year = "2031".into();

        let mut text_year = base.clone();
        text_year.billing_year = "next".into();

        let mut blank_member = base.clone();
        blank_member.members[3] = " ".into();

        for draft in [
            no_service,
            bad_email,
            blank_email,
            no_password,
            bad_day,
            zero_day,
            bad_year,
            text_year,
            blank_member,
        ] {
            let err = draft.build().unwrap_err();
            assert!(err.is_validation(), "{:?} should fail validation", draft);
        }
    }

    #[test]
    fn test_build_boundaries() {
        let mut draft = filled(StreamingService::Crunchyroll, AccountKind::Personal);
        draft.billing_day = "1".into();
        draft.billing_year = "2024".into();
        assert!(draft.build().is_ok());

        draft.billing_day = "31".into();
        draft.billing_year = "2030".into();
        assert!(draft.build().is_ok());
    }

    #[test]
    fn test_member_error_names_slot() {
        let mut draft = filled(StreamingService::Netflix, AccountKind::Group);
        draft.members[1].clear();
        assert_eq!(
            draft.build().unwrap_err().to_string(),
            "Validation error: Member 2 needs a name"
        );
    }

    #[test]
    fn test_from_account_round_trip() {
        let details = filled(StreamingService::Spotify, AccountKind::Group).build().unwrap();
        let account = SubscriptionAccount::new(details.clone());
        assert_eq!(Draft::from_account(&account).build().unwrap(), details);
    }
}
