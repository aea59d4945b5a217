//! Vellum CLI - documentation index and corpus build tooling.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "vellum")]
#[command(about = "Build tooling for component documentation sites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to vellum.toml config file
    #[arg(short, long, default_value = "vellum.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the searchable docs index module
    Index {
        /// Output file (defaults to config or "src/docs-index.js")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Concatenate the markdown tree into a single corpus file
    Corpus {
        /// Output file (defaults to config or "llms.txt")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Index { output } => {
            commands::index::run(&cli.config, output)?;
        }
        Commands::Corpus { output } => {
            commands::corpus::run(&cli.config, output)?;
        }
    }

    Ok(())
}
