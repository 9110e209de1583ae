//! # docs-landing
//!
//! Renders the documentation landing page to a static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Validate catalog, quick links and site config
//! docs-landing check --config site.toml
//!
//! # Render to build/index.html
//! docs-landing render --config site.toml --out build/index.html
//!
//! # Inspect the catalog
//! docs-landing list --json
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "docs-landing")]
#[command(about = "Render the documentation landing page to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the catalog and render the page
    Render {
        /// Site config file (TOML); defaults are used when it does not exist
        #[arg(long, default_value = "site.toml")]
        config: PathBuf,
        /// Output file, or `-` for stdout
        #[arg(long, default_value = "index.html")]
        out: PathBuf,
    },
    /// Validate the catalog, quick links and site config without rendering
    Check {
        /// Site config file (TOML)
        #[arg(long, default_value = "site.toml")]
        config: PathBuf,
    },
    /// Print the application catalog
    List {
        /// Emit pretty-printed JSON instead of one line per application
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so `render --out -` keeps stdout clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match args.command {
        Command::Render { config, out } => commands::render(&config, &out),
        Command::Check { config } => commands::check(&config),
        Command::List { json } => commands::list(json),
    }
}
