//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration directory.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "TokenGuide";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "TokenGuide";

/// Prompt shown when a guideline is requested without a file.
pub const MISSING_FILE_MESSAGE: &str = "Please choose a file first.";
