//! Rendering-ready style guideline model.

use crate::models::{TokenCategory, WcagRating};
use serde::{Deserialize, Serialize};

/// Contrast of a color token against the white reference background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorContrast {
    /// Raw ratio
    pub ratio: f64,
    /// Ratio with two decimals
    pub ratio_text: String,
    /// WCAG tier
    pub rating: WcagRating,
}

/// One decorated token in a guideline section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidelineEntry {
    /// Token name
    pub name: String,
    /// Token value as written in the source
    pub value: String,
    /// `rgb(r, g, b)` text of the value
    pub rgb_text: String,
    /// `hsl(h, s%, l%)` text of the value
    pub hsl_text: String,
    /// Swatch fill (the raw value), colors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch: Option<String>,
    /// Contrast against `#ffffff`, colors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<ColorContrast>,
}

/// Entries for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidelineSection {
    /// Category of every entry in this section
    pub category: TokenCategory,
    /// Section title
    pub title: String,
    /// Decorated tokens in source order
    pub entries: Vec<GuidelineEntry>,
}

/// Complete guideline: one section per category, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidelineModel {
    /// Sections, always five
    pub sections: Vec<GuidelineSection>,
}

impl GuidelineModel {
    /// Section for a category.
    #[must_use]
    pub fn section(&self, category: TokenCategory) -> Option<&GuidelineSection> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Total number of entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}
