//! Error scenario integration tests

use std::path::Path;
use std::process::Command;

fn notifier_bin(preferences: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_notifier-patterns"));
    cmd.env("NOTIFIER_PATTERNS_PREFERENCES", preferences);
    cmd
}

#[test]
fn send_unknown_kind() {
    let dir = tempfile::tempdir().unwrap();
    let output = notifier_bin(&dir.path().join("preferences.toml"))
        .args(["send", "carrier-pigeon", "loft", "coo"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown notification type: carrier-pigeon"),
        "Expected unknown type error, got: {}",
        stderr
    );
}

#[test]
fn send_kind_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let output = notifier_bin(&dir.path().join("preferences.toml"))
        .args(["send", "SMS", "+1234567890", "Hello"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn unknown_preference_is_skipped_and_run_completes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(
        &path,
        r#"
[[preferences]]
kind = "fax"
destination = "+15550000"
message = "Skipped"

[[preferences]]
kind = "push"
destination = "device999"
message = "Delivered"
"#,
    )
    .unwrap();

    let output = notifier_bin(&path)
        .arg("factory")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Skipped"));
    assert!(stdout.contains("device999, Delivered"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown notification type: fax"));
}

#[test]
fn malformed_preferences_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "this is not toml = = =").unwrap();

    let output = notifier_bin(&path)
        .arg("factory")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 6);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("using default preferences"));
}

#[test]
fn config_init_twice_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    let first = notifier_bin(&path)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(first.status.success());

    let second = notifier_bin(&path)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("already exists"), "got: {}", stderr);
}

#[test]
fn config_add_unknown_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    let output = notifier_bin(&path)
        .args(["config", "add", "carrier-pigeon", "loft", "coo"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(!path.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Valid kinds"), "got: {}", stderr);
}

#[test]
fn missing_subcommand_argument_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = notifier_bin(&dir.path().join("preferences.toml"))
        .args(["send", "sms"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
