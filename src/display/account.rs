//! Account display formatting
//!
//! Formats accounts for terminal output as a table and as detail cards.

use crate::models::{SubscriptionAccount, PASSWORD_MASK};

use super::partition::Partition;

/// Password as it should be shown
pub fn display_password(account: &SubscriptionAccount, reveal: bool) -> &str {
    if reveal {
        &account.password
    } else {
        PASSWORD_MASK
    }
}

/// Format accounts as a table, personal accounts first, then group accounts
pub fn format_account_list(accounts: &[SubscriptionAccount], reveal: bool) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let partition = Partition::of(accounts);

    let email_width = accounts
        .iter()
        .map(|a| a.email.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let password_width = accounts
        .iter()
        .map(|a| display_password(a, reveal).chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();

    for (title, group) in [("Personal", &partition.personal), ("Group", &partition.group)] {
        if group.is_empty() {
            continue;
        }
        if !output.is_empty() {
            output.push('\n');
        }

        output.push_str(&format!("{} accounts ({})\n", title, group.len()));
        output.push_str(&format!(
            "{:<12}  {:<12}  {:<email_width$}  {:<password_width$}  {:<14}  {}\n",
            "ID",
            "Service",
            "Email",
            "Password",
            "Billing",
            "Members",
            email_width = email_width,
            password_width = password_width,
        ));
        output.push_str(&format!(
            "{:-<12}  {:-<12}  {:-<email_width$}  {:-<password_width$}  {:-<14}  {:-<7}\n",
            "",
            "",
            "",
            "",
            "",
            "",
            email_width = email_width,
            password_width = password_width,
        ));

        for account in group {
            output.push_str(&format!(
                "{:<12}  {:<12}  {:<email_width$}  {:<password_width$}  {:<14}  {}\n",
                account.id.to_string(),
                account.service.to_string(),
                account.email,
                display_password(account, reveal),
                account.billing_label(),
                format_members(&account.members),
                email_width = email_width,
                password_width = password_width,
            ));
        }
    }

    output
}

/// Format a single account as a detail card
pub fn format_account_details(account: &SubscriptionAccount, reveal: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", account.service, account.kind));
    output.push_str(&format!("  ID:       {}\n", account.id));
    output.push_str(&format!("  Email:    {}\n", account.email));
    output.push_str(&format!(
        "  Password: {}\n",
        display_password(account, reveal)
    ));
    output.push_str(&format!("  Billing:  {}\n", account.billing_label()));

    output.push_str("  Members:\n");
    for (i, member) in account.members.iter().enumerate() {
        output.push_str(&format!("    {}. {}\n", i + 1, member));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        account.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Member names joined for a single table cell
pub fn format_members(members: &[String]) -> String {
    if members.is_empty() {
        "-".to_string()
    } else {
        members.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountDetails, AccountKind, StreamingService};

    fn account(kind: AccountKind, email: &str) -> SubscriptionAccount {
        SubscriptionAccount::new(AccountDetails {
            service: StreamingService::Netflix,
            kind,
            email: email.to_string(),
            password: "s3cret".to_string(),
            billing_day: 12,
            billing_year: 2025,
            members: vec!["Ana".to_string(), "Bo".to_string()],
        })
    }

    #[test]
    fn test_format_account_list_masks_passwords() {
        let accounts = vec![
            account(AccountKind::Group, "g@x.io"),
            account(AccountKind::Personal, "p@x.io"),
        ];

        let output = format_account_list(&accounts, false);

        assert!(output.contains("Personal accounts (1)"));
        assert!(output.contains("Group accounts (1)"));
        assert!(output.find("p@x.io").unwrap() < output.find("g@x.io").unwrap());
        assert!(output.contains(PASSWORD_MASK));
        assert!(!output.contains("s3cret"));
        assert!(output.contains("Day 12, 2025"));
        assert!(output.contains("Ana, Bo"));
    }

    #[test]
    fn test_format_account_list_reveal() {
        let output = format_account_list(&[account(AccountKind::Group, "g@x.io")], true);
        assert!(output.contains("s3cret"));
        assert!(!output.contains("Personal accounts"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_account_list(&[], false), "No accounts found.");
    }

    #[test]
    fn test_format_account_details() {
        let account = account(AccountKind::Group, "g@x.io");
        let output = format_account_details(&account, false);

        assert!(output.starts_with("Netflix (Group)"));
        assert!(output.contains(&account.id.to_string()));
        assert!(output.contains("    2. Bo"));
        assert!(!output.contains("s3cret"));
    }

    #[test]
    fn test_format_members_empty() {
        assert_eq!(format_members(&[]), "-");
    }
}
