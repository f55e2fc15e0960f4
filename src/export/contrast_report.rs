//! Plain-text report for the contrast checker.

use crate::services::contrast_checker::{ContrastCheck, WCAG_EXPLANATION, WCAG_EXPLANATION_TITLE};
use std::fmt::Write as _;

/// Renders a contrast check as text, optionally followed by the WCAG explanation.
pub fn generate_contrast_report(check: &ContrastCheck, explain: bool) -> String {
    let mut output = String::new();

    output.push_str("Contrast\n\n");
    let _ = writeln!(output, "Foreground:  {}", check.foreground);
    let _ = writeln!(output, "Background:  {}", check.background);
    let _ = writeln!(output, "Ratio:       {}", check.result.ratio_text());
    let _ = writeln!(output, "Rating:      {}", check.result.rating);
    let _ = writeln!(output, "Description: {}", check.result.description);

    if explain {
        let _ = writeln!(output, "\n{}\n", WCAG_EXPLANATION_TITLE);
        for paragraph in WCAG_EXPLANATION {
            output.push_str(paragraph);
            output.push('\n');
        }
    }

    output
}
