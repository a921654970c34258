//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("flashgrid").expect("Failed to find flashgrid binary")
}

// ============================================================================
// Columns Command Tests
// ============================================================================

#[test]
fn test_columns_command() {
    cli_cmd()
        .args(["columns", "--width", "1000"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_columns_respects_padding() {
    // (1000 - 200 + 40) / 300 = 2.8
    cli_cmd()
        .args(["columns", "--width", "1000", "--padding", "200"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_columns_never_zero() {
    cli_cmd()
        .args(["columns", "--width", "50"])
        .assert()
        .success()
        .stdout("1\n");
}

// ============================================================================
// Presets Command Tests
// ============================================================================

#[test]
fn test_presets_text() {
    cli_cmd()
        .args(["presets", "--width", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auto-fit columns: 3"))
        .stdout(predicate::str::contains("Preset 4 (factor 1.0000)"))
        .stdout(predicate::str::contains("Preset 5 (factor 0.7333)"))
        .stdout(predicate::str::contains("Preset 6"));
}

#[test]
fn test_presets_json() {
    let output = cli_cmd()
        .args(["presets", "--width", "1000", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["base_columns"], 3);
    assert_eq!(value["presets"]["4"]["--emoji-size"], "120px");
    assert_eq!(value["presets"]["5"]["--card-width"], "220px");

    let emoji = value["presets"]["5"]["--emoji-size"].as_str().unwrap();
    let px: f64 = emoji.trim_end_matches("px").parse().unwrap();
    assert!((px - 88.0).abs() < 1e-9);
}

// ============================================================================
// Css Command Tests
// ============================================================================

#[test]
fn test_css_default_is_base() {
    cli_cmd()
        .args(["css", "--width", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(":root {"))
        .stdout(predicate::str::contains("--card-height: 220px;"))
        .stdout(predicate::str::contains("--font-label: 1.3em;"));
}

#[test]
fn test_css_five_columns() {
    cli_cmd()
        .args(["css", "--width", "1000", "--columns", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--grid-min: 220px;"));
}

#[test]
fn test_css_rejects_unknown_columns() {
    cli_cmd()
        .args(["css", "--width", "1000", "--columns", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown column preset"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_overrides_base() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "base": { "grid_min": 200, "gap": 20 } }"#).unwrap();

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .args(["columns", "--width", "1000"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("--config")
        .arg(dir.path().join("nope.json"))
        .args(["columns", "--width", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
