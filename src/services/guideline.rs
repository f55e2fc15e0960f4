//! Guideline generation.
//!
//! Combines classification and color math into a [`GuidelineModel`]
//! that renderers can display without further computation.

use crate::models::{
    CategorizedTokens, ColorContrast, GuidelineEntry, GuidelineModel, GuidelineSection, Token,
    TokenCategory,
};
use crate::parser::{self, TokenParseError};
use crate::services::classifier;
use crate::services::color_math::{contrast_ratio, hex_to_hsl, hex_to_rgb};
use tracing::debug;

/// Background every color token is measured against.
pub const REFERENCE_BACKGROUND: &str = "#ffffff";

fn build_entry(category: TokenCategory, token: &Token) -> GuidelineEntry {
    let is_color = category == TokenCategory::Colors;

    let contrast = is_color.then(|| {
        let result = contrast_ratio(&token.value, REFERENCE_BACKGROUND);
        ColorContrast {
            ratio_text: result.ratio_text(),
            ratio: result.ratio,
            rating: result.rating,
        }
    });

    GuidelineEntry {
        name: token.name.clone(),
        value: token.value.clone(),
        rgb_text: hex_to_rgb(&token.value).to_css_rgb(),
        hsl_text: hex_to_hsl(&token.value).to_css_hsl(),
        swatch: is_color.then(|| token.value.clone()),
        contrast,
    }
}

/// Decorates categorized tokens into a guideline.
///
/// Every category gets a section, even when empty.
#[must_use]
pub fn build_guideline(properties: &CategorizedTokens) -> GuidelineModel {
    let sections = properties
        .iter()
        .map(|(category, tokens)| GuidelineSection {
            category,
            title: category.name().to_string(),
            entries: tokens
                .iter()
                .map(|token| build_entry(category, token))
                .collect(),
        })
        .collect();

    GuidelineModel { sections }
}

/// Runs the whole pipeline: parse, categorize, build.
///
/// Nothing is produced if parsing fails.
pub fn generate_guideline(
    file_name: &str,
    content: &str,
) -> Result<GuidelineModel, TokenParseError> {
    let tokens = parser::parse_tokens(file_name, content)?;
    let properties = classifier::categorize_all(&tokens);
    let model = build_guideline(&properties);

    debug!(
        file = file_name,
        entries = model.entry_count(),
        "Built guideline"
    );

    Ok(model)
}
