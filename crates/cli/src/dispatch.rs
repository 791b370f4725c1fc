//! Command dispatch logic.
//!
//! Responsibilities:
//! - Read the input document and route parsed CLI arguments to command handlers.
//! - Deliver each command's outcome to stdout, an output file or the input file.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Only modified documents are written back with `--in-place`; extracted values always go to stdout.
//! - In-place writes keep the input format so a YAML file stays YAML.

use std::path::PathBuf;

use anyhow::Result;
use dotpath_config::{Config, OutputFormat};
use tracing::{debug, warn};

use crate::args::{Cli, Commands};
use crate::commands::{Outcome, access, select, transform};
use crate::document::{detect_format, read_document};
use crate::error::CliError;
use crate::formatters::{output_result, render, write_to_file};

/// Where command results are delivered.
struct Sink {
    input_file: Option<PathBuf>,
    input_format: OutputFormat,
    output_file: Option<PathBuf>,
    in_place: bool,
    config: Config,
}

/// Run the parsed command against the input document.
pub(crate) fn run_command(cli: Cli, config: Config) -> Result<()> {
    let input_format = detect_format(cli.input_format, cli.file.as_deref());
    let document = read_document(cli.file.as_deref(), input_format)?;
    let paths = config.accessor();
    debug!(command = cli.command.name(), delimiter = %config.delimiter, "running command");

    let sink = Sink {
        input_file: cli.file,
        input_format,
        output_file: cli.output_file,
        in_place: cli.in_place,
        config,
    };

    let outcome = match cli.command {
        Commands::Get { path, default } => {
            access::get(&paths, &document, path.as_deref(), default.as_deref())?
        }
        Commands::Has { paths: requested } => {
            let missing = access::missing(&paths, &document, &requested);
            println!("{}", missing.is_empty());
            if !missing.is_empty() {
                return Err(CliError::PathNotFound(missing.join(", ")).into());
            }
            return Ok(());
        }
        Commands::Set { path, value } => access::set(&paths, document, &path, &value),
        Commands::Add { path, value } => access::add(&paths, document, &path, &value),
        Commands::Forget { paths: requested } => access::forget(&paths, document, &requested),
        Commands::Pull { path, default } => {
            access::pull(&paths, document, &path, default.as_deref())?
        }
        Commands::Only { keys } => select::only(&document, &keys),
        Commands::Except { keys } => select::except(&document, &keys),
        Commands::Dot { prefix } => transform::dot(&paths, &document, &prefix),
        Commands::Undot => transform::undot(&paths, &document)?,
        Commands::Flatten { depth } => transform::flatten(&document, depth),
        Commands::Collapse => transform::collapse(&document),
        Commands::Pluck { value_path, key } => {
            select::pluck(&paths, &document, &value_path, key.as_deref())
        }
        Commands::Divide => select::divide(&document),
        Commands::CrossJoin => transform::cross_join(&document)?,
        Commands::Sort => transform::sort(document),
        Commands::SortBy { path } => transform::sort_by(&paths, &document, &path),
        Commands::Random { count } => select::random(&document, count)?,
        Commands::Shuffle => transform::shuffle(document),
        Commands::First { default } => select::first(&document, default.as_deref())?,
        Commands::Last { default } => select::last(&document, default.as_deref())?,
        Commands::Prepend { value, key } => transform::prepend(document, &value, key.as_deref()),
        Commands::Wrap => transform::wrap_document(document),
        Commands::IsAssoc => select::is_assoc(&document),
    };

    sink.deliver(outcome)
}

impl Sink {
    fn deliver(&self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Value(value) => {
                if self.in_place {
                    warn!("--in-place has no effect on commands that do not modify the document");
                }
                self.emit(&value)
            }
            Outcome::Document(document) => self.store(&document),
            Outcome::Extracted { value, document } => {
                let rendered = render(&value, self.config.output_format, self.config.pretty)?;
                print!("{rendered}");
                if self.in_place || self.output_file.is_some() {
                    self.store(&document)?;
                }
                Ok(())
            }
            Outcome::Flag(flag) => {
                println!("{flag}");
                Ok(())
            }
        }
    }

    /// Render a value in the output format to `--output-file` or stdout.
    fn emit(&self, value: &serde_json::Value) -> Result<()> {
        let format = self.config.output_format;
        let rendered = render(value, format, self.config.pretty)?;
        output_result(&rendered, format, self.output_file.as_deref())
    }

    /// Write a modified document back to the input file, or emit it.
    fn store(&self, document: &serde_json::Value) -> Result<()> {
        match (&self.input_file, self.in_place) {
            (Some(path), true) => {
                let rendered = render(document, self.input_format, self.config.pretty)?;
                write_to_file(&rendered, path)?;
                debug!(path = %path.display(), "document written in place");
                Ok(())
            }
            _ => self.emit(document),
        }
    }
}
