//! Design tokens and the semantic categories they are grouped into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named design value extracted from an input file.
///
/// `value` is kept exactly as it appeared in the source (hex color,
/// length, font stack, ...). Duplicate names are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token identifier, e.g. `bbt-color-primary` or a JSON key
    pub name: String,
    /// Raw token value
    pub value: String,
}

impl Token {
    /// Creates a new token.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Semantic group a token is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenCategory {
    /// Color values
    Colors,
    /// Font families, sizes, weights, line-height and letter-spacing
    Typography,
    /// Spacing scale
    Spacing,
    /// Corner radii
    Radius,
    /// Anything not matched by the other rules
    Other,
}

impl TokenCategory {
    /// All categories in guideline emission order.
    pub const ALL: [Self; 5] = [
        Self::Colors,
        Self::Typography,
        Self::Spacing,
        Self::Radius,
        Self::Other,
    ];

    /// Display name used as the section title.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Colors => "Colors",
            Self::Typography => "Typography",
            Self::Spacing => "Spacing",
            Self::Radius => "Radius",
            Self::Other => "Other",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tokens bucketed by category.
///
/// Always carries all five categories, possibly empty. Order within a
/// bucket is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedTokens {
    buckets: [Vec<Token>; 5],
}

impl CategorizedTokens {
    /// Creates an empty set of buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token to the given category.
    pub fn push(&mut self, category: TokenCategory, token: Token) {
        self.buckets[category.index()].push(token);
    }

    /// Tokens in a single category.
    #[must_use]
    pub fn get(&self, category: TokenCategory) -> &[Token] {
        &self.buckets[category.index()]
    }

    /// Iterates `(category, tokens)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, &[Token])> {
        TokenCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total number of tokens across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns true if no token was categorized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_emission_order() {
        let names: Vec<_> = TokenCategory::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Colors", "Typography", "Spacing", "Radius", "Other"]);
    }

    #[test]
    fn test_empty_buckets_are_present() {
        let tokens = CategorizedTokens::new();
        assert_eq!(tokens.iter().count(), 5);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_push_preserves_duplicates_in_order() {
        let mut tokens = CategorizedTokens::new();
        tokens.push(TokenCategory::Spacing, Token::new("spacing-sm", "4px"));
        tokens.push(TokenCategory::Spacing, Token::new("spacing-sm", "8px"));

        let spacing = tokens.get(TokenCategory::Spacing);
        assert_eq!(spacing.len(), 2);
        assert_eq!(spacing[0].value, "4px");
        assert_eq!(spacing[1].value, "8px");
        assert_eq!(tokens.len(), 2);
    }
}
