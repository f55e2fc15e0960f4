//! Manual foreground/background contrast checking.

use crate::models::ContrastResult;
use crate::services::color_math::{contrast_ratio, is_valid_hex};
use serde::Serialize;

/// Title of the WCAG explanation shown next to the checker.
pub const WCAG_EXPLANATION_TITLE: &str = "How does it work?";

/// Paragraphs explaining the WCAG contrast levels.
pub const WCAG_EXPLANATION: [&str; 4] = [
    "This tool follows the Web Content Accessibility Guidelines (WCAG), which are a series of recommendations for making the web more accessible.",
    "Regarding colors, the standard defines two levels of contrast ratio: AA (minimum contrast) and AAA (enhanced contrast).",
    "The level AA requires a contrast ratio of at least 4.5:1 for normal text and 3:1 for large text (at least 18pt) or bold text.",
    "The level AAA requires a contrast ratio of at least 7:1 for normal text and 4.5:1 for large text or bold text.",
];

/// Contrast result plus whether each input was a committed `#RRGGBB` value.
///
/// Inputs are never corrected. An invalid input is measured as typed,
/// which the color math treats as black.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastCheck {
    /// Foreground as entered
    pub foreground: String,
    /// Background as entered
    pub background: String,
    /// Whether `foreground` is a valid hex color
    pub foreground_valid: bool,
    /// Whether `background` is a valid hex color
    pub background_valid: bool,
    /// Ratio, rating and description
    #[serde(flatten)]
    pub result: ContrastResult,
}

impl ContrastCheck {
    /// Names of inputs that are not valid hex colors.
    #[must_use]
    pub fn invalid_inputs(&self) -> Vec<(&'static str, &str)> {
        let mut invalid = Vec::new();
        if !self.foreground_valid {
            invalid.push(("foreground", self.foreground.as_str()));
        }
        if !self.background_valid {
            invalid.push(("background", self.background.as_str()));
        }
        invalid
    }
}

/// Serialized form of a [`ContrastCheck`] shared by the CLI and web API.
///
/// Adds the two-decimal ratio text next to the flattened check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastResponse {
    /// Inputs, validity and result
    #[serde(flatten)]
    pub check: ContrastCheck,
    /// Ratio with two decimals
    pub ratio_text: String,
}

impl From<ContrastCheck> for ContrastResponse {
    fn from(check: ContrastCheck) -> Self {
        let ratio_text = check.result.ratio_text();
        Self { check, ratio_text }
    }
}

/// Contrast between two colors.
#[must_use]
pub fn check(color_a: &str, color_b: &str) -> ContrastResult {
    contrast_ratio(color_a, color_b)
}

/// Contrast between two colors, annotated with input validity.
#[must_use]
pub fn check_inputs(foreground: &str, background: &str) -> ContrastCheck {
    ContrastCheck {
        foreground: foreground.to_string(),
        background: background.to_string(),
        foreground_valid: is_valid_hex(foreground),
        background_valid: is_valid_hex(background),
        result: check(foreground, background),
    }
}
