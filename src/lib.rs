//! TokenGuide Library
//!
//! This library turns design-token files (JSON or `--bbt-*` custom
//! properties) into categorized style guidelines, and checks color pairs
//! against WCAG 2.x contrast thresholds.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod logging;
pub mod models;
pub mod parser;
pub mod services;
#[cfg(feature = "web")]
pub mod web;
