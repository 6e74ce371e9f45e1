//! Plinth setup CLI - one-shot installer for Plinth themes.
//!
//! Provides commands for:
//! - `install`: Pick a templating engine and wire it into the theme

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::InstallArgs;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plinth setup - get a fresh theme ready to build on.
#[derive(Parser)]
#[command(name = "plinth-setup", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a templating engine and finish theme setup.
    Install(InstallArgs),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let output = Output::new();

    let result = match cli.command {
        Commands::Install(args) => args.execute(VERSION, &output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
