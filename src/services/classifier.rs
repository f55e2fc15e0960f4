//! Token classification by name.
//!
//! Rules are case-sensitive substring tests checked in a fixed order;
//! the first matching rule decides the category.

use crate::models::{CategorizedTokens, Token, TokenCategory};

/// Ordered classification rules: the first rule with a matching keyword wins.
const RULES: [(TokenCategory, &[&str]); 4] = [
    (TokenCategory::Colors, &["color"]),
    (
        TokenCategory::Typography,
        &["font", "line-height", "letter-spacing"],
    ),
    (TokenCategory::Spacing, &["spacing"]),
    (TokenCategory::Radius, &["radius"]),
];

/// Returns the category for a token name.
///
/// ```
/// use tokenguide::models::TokenCategory;
/// use tokenguide::services::classifier::classify;
///
/// assert_eq!(classify("border-color-radius"), TokenCategory::Colors);
/// assert_eq!(classify("bbt-letter-spacing"), TokenCategory::Typography);
/// ```
#[must_use]
pub fn classify(name: &str) -> TokenCategory {
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(*keyword)))
        .map_or(TokenCategory::Other, |(category, _)| *category)
}

/// Appends a `(name, value)` pair to the bucket chosen by [`classify`].
pub fn categorize(properties: &mut CategorizedTokens, name: &str, value: &str) {
    properties.push(classify(name), Token::new(name, value));
}

/// Buckets a token list, preserving source order within each category.
#[must_use]
pub fn categorize_all(tokens: &[Token]) -> CategorizedTokens {
    let mut properties = CategorizedTokens::new();
    for token in tokens {
        categorize(&mut properties, &token.name, &token.value);
    }
    properties
}
