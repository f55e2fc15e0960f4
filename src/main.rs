//! TokenGuide - design-token style guidelines and WCAG contrast checks
//!
//! This application reads a design-token file, groups its tokens into
//! colors, typography, spacing, radius and other, and renders a style
//! guideline. It also checks foreground/background color pairs.

use clap::{Parser, Subcommand};
use tokenguide::cli::{ConfigArgs, ContrastArgs, ExitCode, GuidelineArgs};
use tokenguide::logging;

/// TokenGuide - style guidelines from design tokens
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a style guideline from a token file
    Guideline(GuidelineArgs),
    /// Check the contrast ratio between two colors
    Contrast(ContrastArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose, "warn");

    let result = match &cli.command {
        Commands::Guideline(args) => args.execute(),
        Commands::Contrast(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    let exit_code = match result {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code
        }
    };

    std::process::exit(exit_code.code());
}
