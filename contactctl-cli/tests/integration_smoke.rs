//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("contactctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("contacts"));
}

// === Serve Command Tests ===

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("contactctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("0.0.0.0:8000"));
}

// === Contacts Command Tests ===

#[test]
fn test_contacts_get_help() {
    let mut cmd = Command::cargo_bin("contactctl").unwrap();
    cmd.arg("contacts").arg("get").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Contact id"));
}

#[test]
fn test_contacts_add_help() {
    let mut cmd = Command::cargo_bin("contactctl").unwrap();
    cmd.arg("contacts").arg("add").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("must not already exist"));
}

#[test]
fn test_contacts_get_rejects_non_integer_id() {
    let mut cmd = Command::cargo_bin("contactctl").unwrap();
    cmd.arg("contacts").arg("get").arg("twelve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("contactctl").unwrap();
    cmd.arg("delete");

    cmd.assert().failure();
}
