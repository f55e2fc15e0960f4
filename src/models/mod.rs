//! Data models for tokens, colors, contrast results and guidelines.
//!
//! Models are plain data, independent of parsing and presentation.

pub mod contrast;
pub mod guideline;
pub mod rgb;
pub mod token;

// Re-export all model types
pub use contrast::{ContrastResult, WcagRating};
pub use guideline::{ColorContrast, GuidelineEntry, GuidelineModel, GuidelineSection};
pub use rgb::{HslColor, RgbColor};
pub use token::{CategorizedTokens, Token, TokenCategory};
