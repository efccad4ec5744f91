//! Service table formatting

use crate::models::{AccountKind, StreamingService};

/// Format the supported services with their member capacities
pub fn format_service_table() -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12}  {:<12}  {:>5}  {:>8}\n",
        "Key", "Service", "Group", "Personal"
    ));
    output.push_str(&format!("{:-<12}  {:-<12}  {:->5}  {:->8}\n", "", "", "", ""));

    for service in StreamingService::ALL {
        output.push_str(&format!(
            "{:<12}  {:<12}  {:>5}  {:>8}\n",
            service.key(),
            service.to_string(),
            service.member_capacity(AccountKind::Group),
            service.member_capacity(AccountKind::Personal),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_table_lists_every_service() {
        let output = format_service_table();
        for service in StreamingService::ALL {
            assert!(output.contains(service.key()));
        }
        assert!(output.contains("paramount     Paramount         6         1"));
    }
}
