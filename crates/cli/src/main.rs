//! dotpath - read and rewrite JSON and YAML documents with dotted paths.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve settings through the shared config loader.
//! - Run the command and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Path resolution or array transforms (see `crates/dotpath`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod document;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use dotpath_config::{Config, ConfigLoader};
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::from(&e).as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match build_config(&cli).and_then(|config| run_command(cli, config)) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Resolve settings: CLI flags > environment > settings file > defaults.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank/whitespace-only values are ignored to allow fallback to the default location
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?
        .from_file()
        .context("Failed to load settings file")?;

    if let Some(delimiter) = cli.delimiter {
        loader = loader.with_delimiter(delimiter);
    }
    if let Some(format) = cli.output {
        loader = loader.with_output_format(format);
    }
    if cli.compact {
        loader = loader.with_pretty(false);
    }

    loader.build().context("Failed to build configuration")
}
