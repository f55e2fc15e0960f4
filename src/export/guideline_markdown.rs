//! Markdown rendering of a style guideline.
//!
//! Produces one section per category with a line per token:
//! the token name, its value with RGB/HSL readings, and for colors a
//! swatch reference and the contrast ratio against white.

use crate::models::{GuidelineEntry, GuidelineModel};
use std::fmt::Write as _;

/// Renders a guideline as markdown.
///
/// Empty categories are kept with a placeholder line so the document
/// always has the same five sections.
///
/// # Examples
///
/// ```
/// use tokenguide::export::generate_guideline_markdown;
/// use tokenguide::services::generate_guideline;
///
/// let model = generate_guideline("tokens.css", "--bbt-color-bg: #ffffff;").unwrap();
/// let markdown = generate_guideline_markdown(&model, "Style Guideline");
/// assert!(markdown.contains("## Colors"));
/// ```
pub fn generate_guideline_markdown(model: &GuidelineModel, title: &str) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {}\n", title);

    for section in &model.sections {
        let _ = writeln!(output, "## {}\n", section.title);

        if section.entries.is_empty() {
            output.push_str("_No tokens._\n\n");
            continue;
        }

        for entry in &section.entries {
            write_entry(&mut output, entry);
        }

        output.push('\n');
    }

    output
}

fn write_entry(output: &mut String, entry: &GuidelineEntry) {
    let _ = writeln!(output, "- **{}**", entry.name);

    if let Some(swatch) = &entry.swatch {
        let _ = writeln!(output, "  - Swatch: `{}`", swatch);
    }

    if let Some(contrast) = &entry.contrast {
        let _ = writeln!(
            output,
            "  - Contrast Ratio: {} ({})",
            contrast.ratio_text, contrast.rating
        );
    }

    let _ = writeln!(
        output,
        "  - {} (RGB: {}, HSL: {})",
        entry.value, entry.rgb_text, entry.hsl_text
    );
}
