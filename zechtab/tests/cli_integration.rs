//! Integration tests for zechtab CLI

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;
use zechtablib::{embedded_entries, LatexTable, LayoutOptions};

fn run_zechtab(args: &[&str]) -> (String, String, bool) {
    run_zechtab_with_stdin(args, None)
}

fn run_zechtab_with_stdin(args: &[&str], stdin: Option<&str>) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_zechtab"))
        .args(args)
        .env_remove("ZECHTAB_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    {
        let mut pipe = child.stdin.take().expect("stdin not captured");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait on command");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn expected_default_table() -> String {
    let options = LayoutOptions::default();
    let table = LatexTable::from_entries(&embedded_entries().unwrap(), &options).unwrap();
    table.render(&options)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_zechtab(&["--help"]);

    assert!(success);
    assert!(stdout.contains("zechtab"));
    assert!(stdout.contains("--stride"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("log-table"));
    assert!(stdout.contains("arith"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_zechtab(&["--version"]);

    assert!(success);
    assert!(stdout.contains("zechtab"));
}

#[test]
fn test_default_output() {
    let (stdout, stderr, success) = run_zechtab(&[]);

    assert!(success);
    assert_eq!(stdout, expected_default_table());
    // logging stays off stdout and is quiet by default
    assert!(stderr.is_empty());
}

#[test]
fn test_default_output_is_stable() {
    let (first, _, _) = run_zechtab(&[]);
    let (second, _, _) = run_zechtab(&[]);
    assert_eq!(first, second);
}

#[test]
fn test_json_output() {
    let (stdout, _, success) = run_zechtab(&["table", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["stride"], 17);
    assert_eq!(parsed["rows"].as_array().unwrap().len(), 17);
    assert_eq!(parsed["rows"][0]["cells"][0], "Infinity & 0");
    assert_eq!(parsed["rows"][0]["entries"][0]["key"], "Infinity");
    assert_eq!(parsed["rows"][1]["entries"][0]["value"], 93);
}

#[test]
fn test_log_table_round_trips_through_stdin() {
    let (log_table, _, success) = run_zechtab(&["log-table"]);
    assert!(success);

    let (stdout, _, success) = run_zechtab_with_stdin(&["table", "--input", "-"], Some(&log_table));
    assert!(success);
    assert_eq!(stdout, expected_default_table());
}

#[test]
fn test_input_file_with_stride() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.txt");
    fs::write(&path, "Infinity -> 0\n0 -> Infinity\n").unwrap();

    let (stdout, _, success) = run_zechtab(&["table", "-i", path.to_str().unwrap(), "-s", "1"]);

    assert!(success);
    assert_eq!(stdout, "Infinity & 0 & 0 & Infinity\n");
}

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("layout.toml");
    fs::write(&config, "stride = 2\nrow_separator = \"\\n\"\n").unwrap();
    let input = dir.path().join("table.txt");
    fs::write(&input, "0 -> 1\n1 -> 2\n2 -> 0\n").unwrap();

    let (stdout, _, success) = run_zechtab(&[
        "table",
        "--config",
        config.to_str().unwrap(),
        "--input",
        input.to_str().unwrap(),
    ]);

    assert!(success);
    assert_eq!(stdout, "0 & 1 & 2 & 0\n1 & 2\n");
}

#[test]
fn test_generated_gf16_table() {
    let (stdout, _, success) = run_zechtab(&[
        "table",
        "--prime",
        "2",
        "--modulus",
        "1,0,0,1,1",
        "--stride",
        "4",
    ]);

    assert!(success);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.starts_with("Infinity & 0 & "));
}

#[test]
fn test_arith_output() {
    let (stdout, _, success) = run_zechtab(&["arith", "--prime", "5"]);

    assert!(success);
    assert!(stdout.starts_with("addition table\n+ 0 1 2 3 4\n"));
    assert!(stdout.contains("multiplication table\n* 0 1 2 3 4\n"));
    assert!(stdout.contains("\n2 0 2 4 1 3\n"));
}

#[test]
fn test_element_output() {
    let (stdout, _, success) = run_zechtab(&["element", "--digits", "1,2,0"]);

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "x^2 + 2x");
    assert_eq!(lines[1], "primitive: \"x\"");
    assert!(lines[2].starts_with("\"x^2 + 2x\" = \"x\" ^ "));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (stdout, stderr, success) = run_zechtab(&["--verbose"]);

    assert!(success);
    assert_eq!(stdout, expected_default_table());
    assert!(stderr.contains("laid out table"));
}

#[test]
fn test_missing_input_file() {
    let (stdout, stderr, success) = run_zechtab(&["table", "--input", "/nonexistent/table.txt"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("/nonexistent/table.txt"));
}

#[test]
fn test_malformed_input() {
    let (_, stderr, success) =
        run_zechtab_with_stdin(&["--input", "-"], Some("0 -> 1\nnonsense\n"));

    assert!(!success);
    assert!(stderr.contains("line 2"));
}

#[test]
fn test_composite_prime() {
    let (_, stderr, success) = run_zechtab(&["arith", "--prime", "6"]);

    assert!(!success);
    assert!(stderr.contains("6 is not a prime"));
}

#[test]
fn test_arith_prime_too_large_for_tables() {
    let (stdout, stderr, success) = run_zechtab(&["arith", "--prime", "65537"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("exceeds the limit"));
}

#[test]
fn test_huge_stride() {
    let (stdout, stderr, success) = run_zechtab(&["--stride", "4000000000"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("stride must be between 1 and"));
}

#[test]
fn test_root_json_output() {
    let (stdout, _, success) = run_zechtab(&["--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["stride"], 17);
}
