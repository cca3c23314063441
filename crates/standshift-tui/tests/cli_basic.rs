//! Basic CLI tests.
//!
//! These only exercise argument handling paths that exit before the
//! terminal UI starts: the event loop itself is covered by the unit
//! tests and by standshift-core's integration tests.

use std::process::Command;

/// Run the binary and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "standshift-tui", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute standshift");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help_lists_interval_flags() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0, "help failed");
    assert!(stdout.contains("--stand"));
    assert!(stdout.contains("--sit"));
    assert!(stdout.contains("--no-sound"));
    assert!(stdout.contains("--no-desktop"));
}

#[test]
fn test_version() {
    let (stdout, _, code) = run_cli(&["--version"]);
    assert_eq!(code, 0, "version failed");
    assert!(stdout.contains("standshift"));
}

#[test]
fn test_malformed_duration_is_rejected_before_startup() {
    let (_, stderr, code) = run_cli(&["--stand", "whenever"]);
    assert_ne!(code, 0, "malformed duration must not start the UI");
    assert!(stderr.contains("whenever"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let (_, _, code) = run_cli(&["--frobnicate"]);
    assert_ne!(code, 0);
}
