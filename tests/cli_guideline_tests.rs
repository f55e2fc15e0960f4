//! End-to-end tests for `tokenguide guideline`.

use std::fs;
use std::process::{Command, Output};

mod fixtures;
use fixtures::*;

fn run_guideline(extra: &[&str]) -> Output {
    Command::new(tokenguide_bin())
        .arg("guideline")
        .args(extra)
        .output()
        .expect("Failed to execute command")
}

// ============================================================================
// Markdown Output Tests
// ============================================================================

#[test]
fn test_guideline_success_keeps_stderr_quiet() {
    let (path, _temp_dir) = create_temp_token_file("tokens.json", TOKENS_JSON_LIST);

    // Per-file debug logging stays hidden unless --verbose or RUST_LOG asks for it
    let output = Command::new(tokenguide_bin())
        .env_remove("RUST_LOG")
        .args(["guideline", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(
        output.stderr.is_empty(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_guideline_markdown_from_json_list() {
    let (path, _temp_dir) = create_temp_token_file("tokens.json", TOKENS_JSON_LIST);

    let output = run_guideline(&[path.to_str().unwrap()]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for heading in ["## Colors", "## Typography", "## Spacing", "## Radius", "## Other"] {
        assert!(stdout.contains(heading), "Output should contain {heading}");
    }
    assert!(stdout.contains("- **--bbt-color-primary**"));
    assert!(stdout.contains("Contrast Ratio: 6.00 (AA)"));
    assert!(stdout.contains("8px (RGB: rgb(0, 0, 0), HSL: hsl(0.0, 0.0%, 0.0%))"));
}

#[test]
fn test_guideline_markdown_from_css() {
    let (path, _temp_dir) = create_temp_token_file("tokens.css", TOKENS_CSS);

    let output = run_guideline(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- **bbt-color-bg**"));
    assert!(stdout.contains("Contrast Ratio: 1.00 (Fail)"));
    assert!(stdout.contains("- **bbt-letter-spacing-tight**"));
    assert!(!stdout.contains("color: red"));
}

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_guideline_json_output() {
    let (path, _temp_dir) = create_temp_token_file("tokens.json", TOKENS_JSON_MAP);

    let output = run_guideline(&[path.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let model: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let sections = model["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 5);
    assert_eq!(sections[0]["title"], "Colors");
    assert_eq!(sections[0]["entries"][0]["name"], "--bbt-color-text");
    assert_eq!(sections[0]["entries"][0]["contrast"]["rating"], "AAA");
    assert_eq!(sections[1]["entries"][0]["name"], "--bbt-line-height-body");
    assert_eq!(sections[2]["entries"].as_array().unwrap().len(), 1);
    assert!(sections[3]["entries"].as_array().unwrap().is_empty());
    assert!(sections[2]["entries"][0].get("contrast").is_none());
}

#[test]
fn test_guideline_writes_output_file() {
    let (path, temp_dir) = create_temp_token_file("tokens.ts", TOKENS_CSS);
    let out_path = temp_dir.path().join("guideline.md");

    let output = run_guideline(&[
        path.to_str().unwrap(),
        "--output",
        out_path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));

    let written = fs::read_to_string(&out_path).expect("Output file should exist");
    assert!(written.contains("## Colors"));
    assert!(written.contains("bbt-color-accent"));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_guideline_unsupported_extension() {
    let (path, _temp_dir) = create_temp_token_file("tokens.txt", TOKENS_CSS);

    let output = run_guideline(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "No guideline should be printed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error parsing the file. Please upload a valid file."));
}

#[test]
fn test_guideline_invalid_json() {
    let (path, _temp_dir) = create_temp_token_file("tokens.json", "{ not json");

    let output = run_guideline(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error parsing the file"));
}

#[test]
fn test_guideline_missing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.json");

    let output = run_guideline(&[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please choose a file first."));
}

#[test]
fn test_guideline_css_without_tokens_is_not_an_error() {
    let (path, _temp_dir) = create_temp_token_file("plain.css", "body { margin: 0; }");

    let output = run_guideline(&[path.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let model: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    for section in model["sections"].as_array().unwrap() {
        assert!(section["entries"].as_array().unwrap().is_empty());
    }
}
