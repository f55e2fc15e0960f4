//! Guideline command: parse a token file and render its style guideline.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::MISSING_FILE_MESSAGE;
use crate::export;
use crate::models::GuidelineModel;
use crate::parser::TokenParseError;
use crate::services::generate_guideline;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Generate a style guideline from a design-token file
#[derive(Debug, Clone, Args)]
pub struct GuidelineArgs {
    /// Token file (.json, .css, .ts, .swift, .xml or .dart)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output the guideline model as JSON instead of markdown
    #[arg(long)]
    pub json: bool,

    /// Write the guideline to this file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write the guideline to [file_stem]_guideline_[date].md (or .json)
    #[arg(long)]
    pub save: bool,
}

impl GuidelineArgs {
    /// Execute the guideline command
    pub fn execute(&self) -> CliResult<()> {
        if !self.file.is_file() {
            return Err(CliError::validation(format!(
                "{MISSING_FILE_MESSAGE} File not found: {}",
                self.file.display()
            )));
        }

        let content = fs::read_to_string(&self.file).map_err(|e| {
            CliError::io(format!("Failed to read {}: {e}", self.file.display()))
        })?;

        let file_name = file_name_of(&self.file);
        let model = generate_guideline(&file_name, &content).map_err(|e| {
            warn!(file = %self.file.display(), error = %e, "Failed to parse token file");
            CliError::validation(TokenParseError::USER_MESSAGE)
        })?;

        let rendered = self.render(&model)?;

        match self.output_path() {
            Some(path) => {
                fs::write(&path, rendered).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                println!("✓ Guideline written to: {}", path.display());
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }

    fn render(&self, model: &GuidelineModel) -> CliResult<String> {
        if self.json {
            let mut json = serde_json::to_string_pretty(model)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            json.push('\n');
            return Ok(json);
        }

        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load configuration, using defaults");
            Config::default()
        });
        debug!(title = %config.guideline.title, "Rendering markdown guideline");

        Ok(export::generate_guideline_markdown(
            model,
            &config.guideline.title,
        ))
    }

    /// Get the output file path (user-specified, auto-generated, or stdout)
    fn output_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.output {
            return Some(path.clone());
        }

        if !self.save {
            return None;
        }

        // Auto-generate filename: [file_stem]_guideline_[date].md
        let date = chrono::Local::now().format("%Y-%m-%d");
        let stem = self
            .file
            .file_stem()
            .map_or_else(|| "tokens".to_string(), |s| s.to_string_lossy().to_string());
        let extension = if self.json { "json" } else { "md" };

        Some(PathBuf::from(format!(
            "{}_guideline_{}.{}",
            stem, date, extension
        )))
    }
}

/// File name used for format detection.
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}
