use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn visadesk(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("visadesk").unwrap();
    cmd.env("VISADESK_DATA", data_dir.path());
    cmd
}

#[test]
fn init_seeds_the_data_directory() {
    let dir = TempDir::new().unwrap();

    visadesk(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized data directory"));

    assert!(dir.path().join("services.json").exists());
    assert!(dir.path().join("site-settings.json").exists());
    assert!(dir.path().join("manifest.json").exists());
}

#[test]
fn services_add_then_list() {
    let dir = TempDir::new().unwrap();

    visadesk(&dir)
        .args([
            "services",
            "add",
            "Student Visa",
            "--description",
            "Study abroad support",
            "--icon",
            "graduation-cap",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Service created: Student Visa"));

    visadesk(&dir)
        .args(["services", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student Visa"));

    // Nothing in the trash yet
    visadesk(&dir)
        .args(["services", "list", "--trash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No services found."));
}

#[test]
fn ledger_add_and_totals() {
    let dir = TempDir::new().unwrap();

    visadesk(&dir)
        .args(["clients", "add", "Thiri"])
        .assert()
        .success();

    // Pull the generated client id out of the store
    let clients: Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("clients.json")).unwrap(),
    )
    .unwrap();
    let client_id = clients[0]["id"].as_str().unwrap().to_string();

    visadesk(&dir)
        .args([
            "ledger",
            "add",
            "--client",
            client_id.as_str(),
            "--date",
            "2025-05-01",
            "--kind",
            "credit",
            "--amount",
            "120.50",
            "--description",
            "Visa fee",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded credit of 120.50"));

    visadesk(&dir)
        .args(["ledger", "totals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("120.50"));
}

#[test]
fn backup_export_import_cycle() {
    let dir = TempDir::new().unwrap();
    visadesk(&dir).arg("init").assert().success();
    visadesk(&dir)
        .args(["clients", "add", "Ko Min"])
        .assert()
        .success();

    let backup_path = dir.path().join("backup.json");
    visadesk(&dir)
        .args(["backup", "export", "--output"])
        .arg(&backup_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup written"));

    let fresh = TempDir::new().unwrap();
    visadesk(&fresh)
        .args(["backup", "import"])
        .arg(&backup_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored"));

    visadesk(&fresh)
        .args(["clients", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ko Min"));
}

#[test]
fn login_checks_credentials() {
    let dir = TempDir::new().unwrap();
    visadesk(&dir).arg("init").assert().success();

    visadesk(&dir)
        .args(["settings", "login", "admin", "admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login OK"));

    visadesk(&dir)
        .args(["settings", "login", "admin", "wrong"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid credentials"));
}

#[test]
fn contact_requires_a_message() {
    let dir = TempDir::new().unwrap();

    visadesk(&dir)
        .args([
            "contact", "--name", "Aye", "--email", "aye@example.com", "--message", "",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing required field: message"));

    // A complete submission is stored and listed, with a warning because no
    // mail provider is wired up
    visadesk(&dir)
        .args([
            "contact",
            "--name",
            "Aye",
            "--email",
            "aye@example.com",
            "--subject",
            "Opening hours",
            "--message",
            "Are you open Saturdays?",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message received"))
        .stdout(predicate::str::contains("notification failed"));

    visadesk(&dir)
        .args(["emails", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Opening hours"));
}
