//! TokenGuide Web Server Binary
//!
//! This binary starts the TokenGuide web server that provides a REST API
//! for a browser-based guideline viewer and contrast checker.
//!
//! # Usage
//!
//! ```bash
//! # Start with settings from config.toml (default 127.0.0.1:3002)
//! tokenguide-web
//!
//! # Override host and port
//! tokenguide-web --host 0.0.0.0 --port 8080
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use tokenguide::config::Config;
use tokenguide::{logging, web};

/// TokenGuide Web Server - REST API for guidelines and contrast checks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to the configured port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to the configured host)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(args.verbose, "info");

    // Load or create configuration
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e}");
        Config::default()
    });

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context(format!("Invalid listen address {host}:{port}"))?;

    info!("Guideline title: {}", config.guideline.title);

    // Start the server
    web::run_server(config, addr).await
}
