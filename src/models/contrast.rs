//! WCAG contrast ratings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// WCAG 2.x conformance tier for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagRating {
    /// Ratio of at least 7:1
    #[serde(rename = "AAA")]
    Aaa,
    /// Ratio of at least 4.5:1
    #[serde(rename = "AA")]
    Aa,
    /// Ratio of at least 3:1, sufficient for large text only
    #[serde(rename = "AA Large")]
    AaLarge,
    /// Anything below 3:1
    #[serde(rename = "Fail")]
    Fail,
}

impl WcagRating {
    /// Minimum ratio for AAA.
    pub const AAA_THRESHOLD: f64 = 7.0;
    /// Minimum ratio for AA.
    pub const AA_THRESHOLD: f64 = 4.5;
    /// Minimum ratio for AA large text.
    pub const AA_LARGE_THRESHOLD: f64 = 3.0;

    /// Classifies a contrast ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= Self::AAA_THRESHOLD {
            Self::Aaa
        } else if ratio >= Self::AA_THRESHOLD {
            Self::Aa
        } else if ratio >= Self::AA_LARGE_THRESHOLD {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    /// Short label, e.g. `AA Large`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
            Self::Fail => "Fail",
        }
    }

    /// Human-readable description of the tier.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Aaa => "Excellent contrast",
            Self::Aa => "Good contrast",
            Self::AaLarge => "Adequate contrast for large text",
            Self::Fail => "Poor contrast",
        }
    }
}

impl fmt::Display for WcagRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of comparing two colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Contrast ratio, always >= 1.0
    pub ratio: f64,
    /// WCAG tier for `ratio`
    pub rating: WcagRating,
    /// Description of the tier
    pub description: String,
}

impl ContrastResult {
    /// Builds a result from a ratio, deriving rating and description.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        let rating = WcagRating::from_ratio(ratio);
        Self {
            ratio,
            rating,
            description: rating.description().to_string(),
        }
    }

    /// Ratio with two decimals, e.g. `4.54`.
    #[must_use]
    pub fn ratio_text(&self) -> String {
        format!("{:.2}", self.ratio)
    }
}
