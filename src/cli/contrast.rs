//! Contrast command: compare a foreground and background color.

use crate::cli::common::{CliError, CliResult};
use crate::export;
use crate::services::contrast_checker::{check_inputs, ContrastResponse};
use clap::Args;

/// Check the WCAG contrast ratio between two colors
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Text color (#RRGGBB)
    #[arg(value_name = "FOREGROUND", allow_hyphen_values = true)]
    pub foreground: String,

    /// Background color (#RRGGBB)
    #[arg(value_name = "BACKGROUND", allow_hyphen_values = true)]
    pub background: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Append an explanation of the WCAG levels
    #[arg(long)]
    pub explain: bool,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let check = check_inputs(&self.foreground, &self.background);

        // Invalid inputs are measured as typed (black), so warn rather than fail
        for (field, value) in check.invalid_inputs() {
            eprintln!("Warning: {field} '{value}' is not a #RRGGBB color; treating it as #000000");
        }

        if self.json {
            let response = ContrastResponse::from(check);
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print!("{}", export::generate_contrast_report(&check, self.explain));
        }

        Ok(())
    }
}
