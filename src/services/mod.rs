//! Service layer for the token pipeline.
//!
//! Color math, classification, guideline building and contrast checking.
//! Services take plain inputs and return values; presentation is left to
//! the CLI, the web API and the export module.

pub mod classifier;
pub mod color_math;
pub mod contrast_checker;
pub mod guideline;

// Re-export commonly used types and functions
pub use contrast_checker::{ContrastCheck, ContrastResponse};
pub use guideline::{build_guideline, generate_guideline};
