//! CLI command handlers for TokenGuide.
//!
//! This module provides headless, scriptable access to the token pipeline
//! and the contrast checker.

pub mod common;
pub mod config;
pub mod contrast;
pub mod guideline;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use guideline::GuidelineArgs;
