//! Shared test fixtures for E2E CLI and web API tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// JSON token list with one token per category.
pub const TOKENS_JSON_LIST: &str = r##"[
  {"name": "--bbt-color-primary", "value": "#336699"},
  {"name": "--bbt-font-family", "value": "Inter, sans-serif"},
  {"name": "--bbt-spacing-sm", "value": "8px"},
  {"name": "--bbt-radius-md", "value": "6px"},
  {"name": "--bbt-shadow-lg", "value": "0 4px 8px rgba(0,0,0,.2)"}
]"##;

/// JSON token map.
pub const TOKENS_JSON_MAP: &str = r##"{
  "--bbt-color-text": "#1a1a1a",
  "--bbt-line-height-body": "1.5",
  "--bbt-spacing-sm": "8px"
}"##;

/// CSS custom-property file.
pub const TOKENS_CSS: &str = ":root {
  --bbt-color-bg: #ffffff;
  --bbt-color-accent: #0a6cff;
  --bbt-font-size: 14px;
  --bbt-letter-spacing-tight: -0.01em;
  --bbt-radius-sm: 4px;
  color: red;
}
";

/// Writes `content` to `file_name` inside a fresh temp directory.
///
/// Returns the file path and the directory guard, which must outlive the test.
pub fn create_temp_token_file(file_name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write token file");
    (path, temp_dir)
}

/// Path to the tokenguide binary (set by cargo at compile time)
pub fn tokenguide_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tokenguide")
}
