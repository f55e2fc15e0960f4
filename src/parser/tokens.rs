//! Token file parsing.
//!
//! Two input formats are recognized, selected by the file name suffix:
//!
//! - `.json`: either a list of `{"name": ..., "value": ...}` objects or a
//!   single object whose entries are `name: value` pairs.
//! - `.css`, `.ts`, `.swift`, `.xml`, `.dart`: text scanned for
//!   `--bbt-<identifier>: <value>;` custom-property declarations. The
//!   native syntax of these languages is not parsed.

use super::error::TokenParseError;
use crate::models::Token;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::debug;

/// Suffixes scanned for custom-property declarations.
pub const CUSTOM_PROPERTY_EXTENSIONS: [&str; 5] = [".css", ".ts", ".swift", ".xml", ".dart"];

/// `--bbt-<identifier>: <value>;` with the value running up to the next `;`.
static CUSTOM_PROPERTY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--(bbt-[A-Za-z0-9_-]+):\s*([^;]+);").expect("custom property pattern is valid")
});

/// How a file's text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON document
    Json,
    /// Text containing `--bbt-*` custom properties
    CustomProperties,
}

impl InputFormat {
    /// Picks the format from a file name (case-sensitive suffix match).
    pub fn from_file_name(file_name: &str) -> Result<Self, TokenParseError> {
        if file_name.ends_with(".json") {
            Ok(Self::Json)
        } else if CUSTOM_PROPERTY_EXTENSIONS
            .iter()
            .any(|ext| file_name.ends_with(ext))
        {
            Ok(Self::CustomProperties)
        } else {
            Err(TokenParseError::UnsupportedExtension(file_name.to_string()))
        }
    }
}

/// The two accepted JSON document shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonTokenSource {
    /// `[{"name": "...", "value": "..."}, ...]`
    List(Vec<Value>),
    /// `{"name": "value", ...}`
    Map(Map<String, Value>),
}

impl JsonTokenSource {
    /// Classifies a parsed document; other top-level values carry no tokens.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self::List(items)),
            Value::Object(map) => Some(Self::Map(map)),
            _ => None,
        }
    }

    /// Flattens the document into tokens in document order.
    pub fn into_tokens(self) -> Result<Vec<Token>, TokenParseError> {
        match self {
            Self::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| token_from_list_item(index, &item))
                .collect(),
            Self::Map(map) => map
                .into_iter()
                .map(|(name, value)| token_from_entry(name, &value))
                .collect(),
        }
    }
}

fn token_from_list_item(index: usize, item: &Value) -> Result<Token, TokenParseError> {
    let name = item
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            TokenParseError::MalformedToken(format!("item {index} has no string \"name\""))
        })?;

    let value = item.get("value").unwrap_or(&Value::Null);
    token_from_entry(name.to_string(), value)
}

fn token_from_entry(name: String, value: &Value) -> Result<Token, TokenParseError> {
    if name.is_empty() {
        return Err(TokenParseError::MalformedToken(
            "token name cannot be empty".to_string(),
        ));
    }

    let value = match value {
        Value::String(text) => text.clone(),
        Value::Null => {
            return Err(TokenParseError::MalformedToken(format!(
                "token '{name}' has no value"
            )))
        }
        other => other.to_string(),
    };

    Ok(Token { name, value })
}

/// Parses a JSON token document.
pub fn parse_json(content: &str) -> Result<Vec<Token>, TokenParseError> {
    let document: Value = serde_json::from_str(content)?;
    match JsonTokenSource::from_value(document) {
        Some(source) => source.into_tokens(),
        None => Ok(Vec::new()),
    }
}

/// Extracts every `--bbt-*` custom property from text.
///
/// Names drop the leading `--`. Whitespace after the colon is skipped,
/// but trailing whitespace before the semicolon stays in the value.
///
/// ```
/// use tokenguide::parser::parse_custom_properties;
///
/// let tokens = parse_custom_properties("--bbt-font-size: 14px; --bbt-color-bg: #ffffff;");
/// assert_eq!(tokens[0].name, "bbt-font-size");
/// assert_eq!(tokens[1].value, "#ffffff");
/// ```
#[must_use]
pub fn parse_custom_properties(content: &str) -> Vec<Token> {
    CUSTOM_PROPERTY_PATTERN
        .captures_iter(content)
        .map(|caps| Token::new(&caps[1], &caps[2]))
        .collect()
}

/// Parses file text into tokens, choosing the format from `file_name`.
pub fn parse_tokens(file_name: &str, content: &str) -> Result<Vec<Token>, TokenParseError> {
    let format = InputFormat::from_file_name(file_name)?;
    let tokens = match format {
        InputFormat::Json => parse_json(content)?,
        InputFormat::CustomProperties => parse_custom_properties(content),
    };

    debug!(
        file = file_name,
        ?format,
        count = tokens.len(),
        "Parsed token file"
    );

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseErrorKind;

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(InputFormat::from_file_name("tokens.json").unwrap(), InputFormat::Json);
        for name in ["a.css", "a.ts", "a.swift", "a.xml", "a.dart"] {
            assert_eq!(
                InputFormat::from_file_name(name).unwrap(),
                InputFormat::CustomProperties
            );
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let err = InputFormat::from_file_name("tokens.txt").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnsupportedExtension);

        // Suffix match is case-sensitive
        assert!(InputFormat::from_file_name("TOKENS.JSON").is_err());
        assert!(InputFormat::from_file_name("").is_err());
    }

    #[test]
    fn test_parse_json_list() {
        let tokens =
            parse_json(r##"[{"name":"--bbt-color-primary","value":"#336699"}]"##).unwrap();
        assert_eq!(tokens, vec![Token::new("--bbt-color-primary", "#336699")]);
    }

    #[test]
    fn test_parse_json_map_keeps_document_order() {
        let tokens = parse_json(r#"{"z-spacing": "8px", "a-radius": "4px"}"#).unwrap();
        assert_eq!(tokens[0].name, "z-spacing");
        assert_eq!(tokens[1].name, "a-radius");
    }

    #[test]
    fn test_parse_json_map_does_not_hoist_numeric_keys() {
        let tokens = parse_json(r##"{"b-color": "#000000", "1": "x"}"##).unwrap();
        assert_eq!(tokens[0].name, "b-color");
        assert_eq!(tokens[1].name, "1");
    }

    #[test]
    fn test_parse_json_non_string_values() {
        let tokens = parse_json(r#"{"font-weight": 700, "shadow": {"x": 1}}"#).unwrap();
        assert_eq!(tokens[0].value, "700");
        assert_eq!(tokens[1].value, r#"{"x":1}"#);
    }

    #[test]
    fn test_parse_json_scalar_document_is_empty() {
        assert!(parse_json("42").unwrap().is_empty());
        assert!(parse_json("null").unwrap().is_empty());
        assert!(parse_json(r#""text""#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_invalid() {
        let err = parse_json("{not json").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidJson);
    }

    #[test]
    fn test_parse_json_malformed_items() {
        let missing_name = parse_json(r#"[{"value": "8px"}]"#).unwrap_err();
        assert_eq!(missing_name.kind(), ParseErrorKind::MalformedToken);

        let numeric_name = parse_json(r#"[{"name": 3, "value": "8px"}]"#).unwrap_err();
        assert_eq!(numeric_name.kind(), ParseErrorKind::MalformedToken);

        let missing_value = parse_json(r#"[{"name": "spacing"}]"#).unwrap_err();
        assert_eq!(missing_value.kind(), ParseErrorKind::MalformedToken);

        let empty_key = parse_json(r#"{"": "8px"}"#).unwrap_err();
        assert_eq!(empty_key.kind(), ParseErrorKind::MalformedToken);
    }

    #[test]
    fn test_custom_properties() {
        let tokens = parse_custom_properties("--bbt-font-size: 14px; --bbt-color-bg: #ffffff;");
        assert_eq!(
            tokens,
            vec![
                Token::new("bbt-font-size", "14px"),
                Token::new("bbt-color-bg", "#ffffff"),
            ]
        );
    }

    #[test]
    fn test_custom_properties_keep_trailing_whitespace() {
        let tokens = parse_custom_properties("--bbt-radius-sm:   4px  ;");
        assert_eq!(tokens[0].value, "4px  ");
    }

    #[test]
    fn test_custom_properties_ignore_other_declarations() {
        let css = ":root {\n  --other-color: red;\n  color: blue;\n  --bbt-spacing-md: 16px;\n}";
        let tokens = parse_custom_properties(css);
        assert_eq!(tokens, vec![Token::new("bbt-spacing-md", "16px")]);
    }

    #[test]
    fn test_custom_properties_no_matches() {
        assert!(parse_custom_properties("body { margin: 0; }").is_empty());
    }

    #[test]
    fn test_parse_tokens_dispatch() {
        let tokens = parse_tokens("theme.swift", "let x = \"--bbt-color-a: #000000;\"").unwrap();
        assert_eq!(tokens.len(), 1);

        let err = parse_tokens("tokens.txt", "--bbt-color-a: #000000;").unwrap_err();
        assert!(matches!(err, TokenParseError::UnsupportedExtension(name) if name == "tokens.txt"));
    }
}
