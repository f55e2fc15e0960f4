//! Errors raised while turning file text into tokens.

use thiserror::Error;

/// Discriminant of [`TokenParseError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Text claimed to be JSON but is not well-formed
    InvalidJson,
    /// File name suffix is not a recognized format
    UnsupportedExtension,
    /// JSON was valid but an entry cannot be read as a token
    MalformedToken,
}

/// Failure of the token parsing stage.
#[derive(Debug, Error)]
pub enum TokenParseError {
    /// The JSON document could not be parsed.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The file name does not end in a supported extension.
    #[error("unsupported file format: {0}")]
    UnsupportedExtension(String),

    /// A JSON entry lacks a usable token name.
    #[error("malformed token: {0}")]
    MalformedToken(String),
}

impl TokenParseError {
    /// Message shown to end users for any parse failure; details go to logs.
    pub const USER_MESSAGE: &'static str = "Error parsing the file. Please upload a valid file.";

    /// Kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::InvalidJson(_) => ParseErrorKind::InvalidJson,
            Self::UnsupportedExtension(_) => ParseErrorKind::UnsupportedExtension,
            Self::MalformedToken(_) => ParseErrorKind::MalformedToken,
        }
    }
}
