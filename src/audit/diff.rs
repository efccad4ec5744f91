//! Diff generation for audit logging

use serde_json::Value;

/// Top-level field changes between two JSON values, or `None` if equal
///
/// `updated_at` is ignored since it changes on every save.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                if key == "updated_at" {
                    continue;
                }
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let truncated: String = s.chars().take(47).collect();
                format!("\"{}...\"", truncated)
            } else {
                format!("\"{}\"", s)
            }
        }
        // Member lists are short; show them in full
        Value::Array(arr) if arr.len() <= 6 && arr.iter().all(Value::is_string) => {
            let items: Vec<_> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let value = json!({"email": "a@x.io", "day": 3});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_changed_fields() {
        let before = json!({"email": "a@x.io", "day": 3});
        let after = json!({"email": "a@x.io", "day": 9});
        assert_eq!(generate_diff(&before, &after).unwrap(), "day: 3 -> 9");
    }

    #[test]
    fn test_updated_at_ignored() {
        let before = json!({"updated_at": "2025-01-01T00:00:00Z"});
        let after = json!({"updated_at": "2025-02-01T00:00:00Z"});
        assert_eq!(generate_diff(&before, &after), None);
    }

    #[test]
    fn test_member_list_shown_in_full() {
        let before = json!({"members": ["Ana", ""]});
        let after = json!({"members": ["Ana", "Bo"]});
        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "members: [\"Ana\", \"\"] -> [\"Ana\", \"Bo\"]"
        );
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"old": 1});
        let after = json!({"new": 2});
        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: 1 -> (removed)"));
        assert!(diff.contains("new: (added) -> 2"));
    }

    #[test]
    fn test_long_string_truncated() {
        let long = "x".repeat(60);
        let diff = generate_diff(&json!({"email": ""}), &json!({"email": long})).unwrap();
        assert!(diff.ends_with("...\""));
    }

    #[test]
    fn test_non_object_values() {
        assert_eq!(generate_diff(&json!(1), &json!(2)).unwrap(), "1 -> 2");
        assert_eq!(generate_diff(&json!(1), &json!(1)), None);
    }
}
