//! Integration tests for the wing_pricer CLI

use std::io::Write;
use std::process::{Command, Stdio};

fn run_wing_pricer(args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wing_pricer"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    // The process may exit before reading stdin (e.g. missing argument)
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes());

    let output = child.wait_with_output().expect("Failed to wait on command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_wing_pricer(&["--help"], "");

    assert!(success);
    assert!(stdout.contains("wing_pricer"));
    assert!(stdout.contains("--menu"));
    assert!(stdout.contains("--search"));
    assert!(stdout.contains("--at-least"));
}

#[test]
fn test_report_output() {
    let (stdout, stderr, success) = run_wing_pricer(&["12"], "3 9\n5 13\n");

    assert!(success);
    assert_eq!(
        stdout,
        "number of wings\tminimum price\toptimal partition\n\
         3\t9\t3\n\
         4\t-\t-\n\
         5\t13\t5\n\
         6\t18\t3, 3\n\
         7\t-\t-\n\
         8\t22\t3, 5\n\
         9\t27\t3, 3, 3\n\
         10\t26\t5, 5\n\
         11\t31\t3, 3, 5\n\
         12\t36\t3, 3, 3, 3\n"
    );
    assert!(stderr.contains("Menu:"));
    assert!(stderr.contains("3 wings \t9"));
    assert!(stderr.contains("5 wings \t13"));
}

#[test]
fn test_parallel_search_same_report() {
    let menu = "3 9 5 13 7 17 11 20\n";
    let (sequential, _, ok1) = run_wing_pricer(&["60", "-q"], menu);
    let (parallel, _, ok2) = run_wing_pricer(&["60", "-q", "--search", "parallel"], menu);

    assert!(ok1 && ok2);
    assert_eq!(sequential, parallel);
}

#[test]
fn test_missing_max_wings() {
    let (stdout, stderr, success) = run_wing_pricer(&[], "3 9\n");

    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Please specify the maximum serving size to calculate!"));
}

#[test]
fn test_empty_menu() {
    let (stdout, stderr, success) = run_wing_pricer(&["12"], "  \n");

    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error: The menu may not be empty!"));
}

#[test]
fn test_malformed_menu() {
    let (stdout, stderr, success) = run_wing_pricer(&["12"], "3 9\n5 thirteen\n");

    assert!(success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("An error occured while parsing the menu"));
    assert!(stderr.contains("thirteen"));
}

#[test]
fn test_quiet_suppresses_menu_echo() {
    let (stdout, stderr, success) = run_wing_pricer(&["4", "--quiet"], "3 9\n");

    assert!(success);
    assert!(stdout.starts_with("number of wings"));
    assert!(!stderr.contains("Menu:"));
}

#[test]
fn test_max_below_smallest_item() {
    let (stdout, _, success) = run_wing_pricer(&["2", "-q"], "3 9\n");

    assert!(success);
    assert_eq!(stdout, "number of wings\tminimum price\toptimal partition\n");
}

#[test]
fn test_at_least() {
    let (_, stderr, success) = run_wing_pricer(&["12", "-q", "--at-least", "7"], "3 9\n5 13\n");

    assert!(success);
    assert!(stderr.contains("Cheapest order of at least 7 wings: 8 wings for 22 (3, 5)"));
}

#[test]
fn test_missing_menu_file_fails() {
    let (stdout, stderr, success) =
        run_wing_pricer(&["12", "--menu", "/nonexistent/menu.txt"], "");

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("/nonexistent/menu.txt"));
}

#[test]
fn test_verbose_summary() {
    let (stdout, stderr, success) = run_wing_pricer(&["12", "-q", "-v"], "3 9\n5 13\n");

    assert!(success);
    assert!(stdout.starts_with("number of wings"));
    assert!(stderr.contains("PRICE TABLE"));
    assert!(stderr.contains("Feasible:"));
}
