//! CLI surface tests
//!
//! Usage text and argument errors go to standard output; startup argument
//! problems never reach the scheduler.

use std::process::Command;

fn bin() -> Command {
	Command::new(env!("CARGO_BIN_EXE_replicr"))
}

#[test]
fn test_missing_arguments_print_usage_on_stdout() {
	let output = bin().output().unwrap();

	assert!(!output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("Usage:"), "usage text must be on stdout, got: {}", stdout);
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(!stderr.contains("Usage:"), "usage text must not be on stderr");
}

#[test]
fn test_help_prints_on_stdout_and_exits_cleanly() {
	let output = bin().arg("--help").output().unwrap();

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("Usage:"));
	assert!(stdout.contains("SOURCE_FOLDER"));
	assert!(stdout.contains("INTERVAL_SECONDS"));
}

#[test]
fn test_non_numeric_interval_is_a_startup_error() {
	let output = bin().args(["/tmp/src", "/tmp/dst", "abc", "/tmp/mirror.log"]).output().unwrap();

	assert!(!output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("invalid value"), "parse error must be on stdout, got: {}", stdout);
}

#[test]
fn test_zero_interval_is_a_startup_error() {
	let output = bin().args(["/tmp/src", "/tmp/dst", "0", "/tmp/mirror.log"]).output().unwrap();

	assert!(!output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("invalid value"), "range error must be on stdout, got: {}", stdout);
}

// vim: ts=4
