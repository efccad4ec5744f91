//! CSV export
//!
//! One row per account for spreadsheets. Member names share a single column.

use std::io::Write;

use crate::error::{StreamkeepError, StreamkeepResult};
use crate::models::SubscriptionAccount;

/// Separator between member names in the members column
pub const MEMBER_SEPARATOR: &str = "; ";

const HEADER: [&str; 9] = [
    "ID", "Service", "Type", "Email", "Password", "Day", "Year", "Members", "Updated",
];

/// Export the collection as CSV
pub fn export_csv<W: Write>(accounts: &[SubscriptionAccount], writer: W) -> StreamkeepResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let err = |e: csv::Error| StreamkeepError::Export(e.to_string());

    csv.write_record(HEADER).map_err(err)?;

    for account in accounts {
        csv.write_record([
            account.id.as_uuid().to_string(),
            account.service.key().to_string(),
            account.kind.to_string().to_lowercase(),
            account.email.clone(),
            account.password.clone(),
            account.billing_day.to_string(),
            account.billing_year.to_string(),
            account.members.join(MEMBER_SEPARATOR),
            account.updated_at.to_rfc3339(),
        ])
        .map_err(err)?;
    }

    csv.flush().map_err(|e| StreamkeepError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountDetails, AccountKind, StreamingService};

    #[test]
    fn test_export_csv() {
        let account = SubscriptionAccount::new(AccountDetails {
            service: StreamingService::Netflix,
            kind: AccountKind::Group,
            email: "a@x.io".to_string(),
            password: "pa,ss".to_string(),
            billing_day: 12,
            billing_year: 2025,
            members: vec!["Ana".into(), "Bo".into(), "Cy".into(), "Di".into(), "Ed".into()],
        });
        let mut output = Vec::new();

        export_csv(std::slice::from_ref(&account), &mut output).unwrap();

        let mut reader = csv::Reader::from_reader(output.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER);

        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "netflix");
        assert_eq!(&rows[0][2], "group");
        assert_eq!(&rows[0][4], "pa,ss");
        assert_eq!(&rows[0][7], "Ana; Bo; Cy; Di; Ed");
    }

    #[test]
    fn test_export_empty_has_header_only() {
        let mut output = Vec::new();
        export_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }
}
