//! End-to-end tests for the streamkeep binary
//!
//! Each test points STREAMKEEP_DATA_DIR at its own temporary directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn streamkeep(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("streamkeep").unwrap();
    cmd.env("STREAMKEEP_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn add_personal(dir: &TempDir, service: &str, email: &str) {
    streamkeep(dir)
        .args([
            "account", "add", "--service", service, "--kind", "personal", "--email", email,
            "--password", "hunter2", "--day", "12", "--year", "2025", "--member", "Ana",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created account"));
}

fn stored(dir: &TempDir) -> serde_json::Value {
    let raw = std::fs::read_to_string(dir.path().join("data").join("streamingGroups.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn add_then_list_masks_password() {
    let dir = TempDir::new().unwrap();
    add_personal(&dir, "netflix", "me@example.com");

    streamkeep(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("me@example.com"))
        .stdout(predicate::str::contains("Personal accounts (1)"))
        .stdout(predicate::str::contains("hunter2").not());

    streamkeep(&dir)
        .args(["account", "list", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2"));
}

#[test]
fn stored_payload_uses_record_field_names() {
    let dir = TempDir::new().unwrap();
    add_personal(&dir, "hbo", "me@example.com");

    let value = stored(&dir);
    let first = &value[0];
    assert_eq!(first["service"], "hbo");
    assert_eq!(first["type"], "personal");
    assert_eq!(first["day"], 12);
    assert_eq!(first["year"], 2025);
    assert_eq!(first["members"], serde_json::json!(["Ana"]));
}

#[test]
fn group_account_requires_every_member() {
    let dir = TempDir::new().unwrap();

    streamkeep(&dir)
        .args([
            "account", "add", "--service", "netflix", "--kind", "group", "--email",
            "team@example.com", "--password", "pw", "--day", "1", "--member", "Ana",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Member 2 needs a name"));
}

#[test]
fn out_of_range_day_is_rejected() {
    let dir = TempDir::new().unwrap();

    streamkeep(&dir)
        .args([
            "account", "add", "--service", "spotify", "--kind", "personal", "--email",
            "me@example.com", "--password", "pw", "--day", "32", "--member", "Ana",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Billing day must be between 1 and 31"));
}

#[test]
fn edit_and_delete_by_short_id() {
    let dir = TempDir::new().unwrap();
    add_personal(&dir, "prime", "a@example.com");
    add_personal(&dir, "spotify", "b@example.com");

    let id = stored(&dir)[0]["id"].as_str().unwrap().to_string();
    let short = format!("sub-{}", &id[..8]);

    streamkeep(&dir)
        .args(["account", "edit", &short, "--email", "a2@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated account"));

    let value = stored(&dir);
    assert_eq!(value[0]["email"], "a2@example.com");
    assert_eq!(value[1]["email"], "b@example.com");

    streamkeep(&dir)
        .args(["account", "delete", &short, "--force"])
        .assert()
        .success();

    let value = stored(&dir);
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["email"], "b@example.com");
}

#[test]
fn delete_prompt_declined_keeps_account() {
    let dir = TempDir::new().unwrap();
    add_personal(&dir, "crunchyroll", "a@example.com");
    let id = stored(&dir)[0]["id"].as_str().unwrap().to_string();

    streamkeep(&dir)
        .args(["account", "delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));
    assert_eq!(stored(&dir).as_array().unwrap().len(), 1);

    streamkeep(&dir)
        .args(["account", "delete", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted account"));
    assert_eq!(stored(&dir), serde_json::json!([]));
}

#[test]
fn unknown_account_fails() {
    let dir = TempDir::new().unwrap();

    streamkeep(&dir)
        .args(["account", "show", "sub-ffffffff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found"));
}

#[test]
fn services_lists_capacities() {
    let dir = TempDir::new().unwrap();

    streamkeep(&dir)
        .arg("services")
        .assert()
        .success()
        .stdout(predicate::str::contains("netflix"))
        .stdout(predicate::str::contains("crunchyroll"));
}

#[test]
fn export_csv_by_extension() {
    let dir = TempDir::new().unwrap();
    add_personal(&dir, "netflix", "me@example.com");
    let output = dir.path().join("accounts.csv");

    streamkeep(&dir)
        .args(["export", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(csv)"));

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("ID,Service,Type,Email"));
    assert!(csv.contains("me@example.com"));
}

#[test]
fn history_records_changes_without_passwords() {
    let dir = TempDir::new().unwrap();
    add_personal(&dir, "netflix", "me@example.com");

    streamkeep(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Account"));

    let audit = std::fs::read_to_string(dir.path().join("audit.log")).unwrap();
    assert!(!audit.contains("hunter2"));
}

#[test]
fn config_shows_and_saves_settings() {
    let dir = TempDir::new().unwrap();

    streamkeep(&dir)
        .args(["config", "--default-kind", "personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default account type: Personal"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn corrupt_store_loads_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data").join("streamingGroups.json"), "not json").unwrap();

    streamkeep(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts found."));
}
