//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify exit codes and JSON output shape.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(user: &str, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "studydesk-cli", "--quiet", "--"])
        .args(["--user", user])
        .args(args)
        .env("STUDYDESK_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn test_user(name: &str) -> String {
    format!("cli-test-{name}-{}", std::process::id())
}

#[test]
fn task_add_and_list() {
    let user = test_user("task");
    let (stdout, stderr, code) = run_cli(&user, &["task", "add", "Test Task"]);
    assert_eq!(code, 0, "task add failed: {stderr}");
    assert!(stdout.contains("Test Task"));

    let (stdout, stderr, code) = run_cli(&user, &["task", "list"]);
    assert_eq!(code, 0, "task list failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("list is JSON");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(1));
}

#[test]
fn assignment_with_time_derives_slot() {
    let user = test_user("assignment");
    let (_, stderr, code) = run_cli(
        &user,
        &[
            "assignment", "add", "Essay", "--course", "Eng101", "--due", "2024-05-01", "--time",
            "14:00",
        ],
    );
    assert_eq!(code, 0, "assignment add failed: {stderr}");

    let (stdout, _, code) = run_cli(&user, &["slot", "list"]);
    assert_eq!(code, 0);
    let slots: serde_json::Value = serde_json::from_str(&stdout).expect("slots are JSON");
    let slots = slots.as_array().expect("array");
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0]["start"], "14:00");
    assert_eq!(slots[0]["end"], "15:00");
}

#[test]
fn stats_xp_reports_level() {
    let user = test_user("stats");
    let (stdout, stderr, code) = run_cli(&user, &["stats", "xp"]);
    assert_eq!(code, 0, "stats xp failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stats are JSON");
    assert_eq!(parsed["xp"], 0);
    assert_eq!(parsed["level"], 1);
}

#[test]
fn calendar_list_is_json() {
    let user = test_user("calendar");
    let (stdout, stderr, code) = run_cli(&user, &["calendar", "list"]);
    assert_eq!(code, 0, "calendar list failed: {stderr}");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}
