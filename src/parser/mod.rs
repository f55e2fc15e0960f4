//! Parsing of design-token files.
//!
//! This module turns raw file text into a flat list of tokens. It knows
//! nothing about categories or rendering.

pub mod error;
pub mod tokens;

// Re-export commonly used functions and types
pub use error::{ParseErrorKind, TokenParseError};
pub use tokens::{parse_custom_properties, parse_json, parse_tokens, InputFormat, JsonTokenSource};
