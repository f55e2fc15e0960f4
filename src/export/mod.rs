//! Export functionality for guidelines and contrast checks.
//!
//! Renders the structured results of the service layer as markdown or
//! plain text for the CLI and the web API.

pub mod contrast_report;
pub mod guideline_markdown;

pub use contrast_report::generate_contrast_report;
pub use guideline_markdown::generate_guideline_markdown;
