#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the binary starts correctly and responds to
//! basic commands without crashing. Commands that would touch the
//! network are cut off earlier, at the login gate, by pointing the
//! state directory at an empty temp dir.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn chatbox() -> Command {
    Command::cargo_bin("chatbox").unwrap()
}

fn chatbox_with_empty_state(temp_dir: &TempDir) -> Command {
    let mut cmd = chatbox();
    cmd.env("XDG_STATE_HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path());
    cmd
}

#[test]
fn test_help_displays_usage() {
    chatbox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Terminal chat client for a document Q&A backend",
        ))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_version_displays_version() {
    chatbox()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_chat_requires_login() {
    let temp_dir = TempDir::new().unwrap();
    chatbox_with_empty_state(&temp_dir)
        .arg("chat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"))
        .stderr(predicate::str::contains("chatbox login"));
}

#[test]
fn test_default_command_requires_login() {
    let temp_dir = TempDir::new().unwrap();
    chatbox_with_empty_state(&temp_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_upload_requires_login() {
    let temp_dir = TempDir::new().unwrap();
    chatbox_with_empty_state(&temp_dir)
        .args(["upload", "manual.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_logout_without_session() {
    let temp_dir = TempDir::new().unwrap();
    chatbox_with_empty_state(&temp_dir)
        .arg("logout")
        .assert()
        .success()
        .stderr(predicate::str::contains("No active session"));
}

#[test]
fn test_upload_help() {
    chatbox()
        .args(["upload", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".pdf"))
        .stdout(predicate::str::contains("admin"));
}
