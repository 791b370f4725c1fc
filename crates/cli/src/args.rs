//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve settings (see `main::build_config`).

use clap::{Parser, Subcommand};
use dotpath_config::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dotpath")]
#[command(about = "Read and rewrite JSON and YAML documents with dotted paths", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dotpath -f config.json get database.connections.0.host\n  echo '{\"a\":{\"b\":1}}' | dotpath set a.c 2\n  dotpath -f settings.yaml -o json dot\n  dotpath -f config.json --in-place forget app.debug cache.prefix\n  dotpath -f users.json pluck email --key id\n"
)]
pub struct Cli {
    /// Input document (reads stdin when omitted)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Input format (json, yaml); inferred from the file extension when omitted
    #[arg(long, global = true, value_name = "FORMAT", value_parser = parse_format)]
    pub input_format: Option<OutputFormat>,

    /// Output format (json, yaml).
    ///
    /// Can also be set via DOTPATH_OUTPUT_FORMAT or `output.format` in the settings file.
    #[arg(short, long, global = true, value_name = "FORMAT", value_parser = parse_format)]
    pub output: Option<OutputFormat>,

    /// Path delimiter.
    ///
    /// Can also be set via DOTPATH_DELIMITER or `path.delimiter` in the settings file.
    #[arg(short, long, global = true, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Write JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "in_place")]
    pub output_file: Option<PathBuf>,

    /// Write the modified document back to the input file
    #[arg(long, global = true, requires = "file")]
    pub in_place: bool,

    /// Path to a custom settings file (overrides default location).
    ///
    /// Can also be set via DOTPATH_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "DOTPATH_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    raw.parse()
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value at a path (the whole document when no path is given)
    Get {
        /// Path to read
        path: Option<String>,

        /// Value (JSON, or a plain string) printed when the path is missing
        #[arg(long, value_name = "VALUE")]
        default: Option<String>,
    },

    /// Check that every path exists; prints true or false and exits 4 when false
    Has {
        /// Paths to check
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Set the value at a path, creating intermediate objects
    Set {
        /// Path to write
        path: String,

        /// Value to store (JSON, or a plain string)
        value: String,
    },

    /// Set the value at a path only when it is missing or null
    Add {
        /// Path to write
        path: String,

        /// Value to store (JSON, or a plain string)
        value: String,
    },

    /// Remove one or more paths
    Forget {
        /// Paths to remove
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the value at a path and remove it from the document
    Pull {
        /// Path to take
        path: String,

        /// Value printed when the path is missing
        #[arg(long, value_name = "VALUE")]
        default: Option<String>,
    },

    /// Keep only the listed top-level keys
    Only {
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Drop the listed top-level keys
    Except {
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Flatten the document into a single object with delimiter-joined keys
    Dot {
        /// Prefix added to every key
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Expand an object with delimiter-joined keys into a nested document
    Undot,

    /// Flatten nested containers into one list of values
    Flatten {
        /// Number of levels to open (unlimited when omitted or 0)
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Merge a list of containers into one
    Collapse,

    /// Collect the value at a path from every element
    Pluck {
        /// Path of the value inside each element
        value_path: String,

        /// Path of the key inside each element
        #[arg(long, value_name = "PATH")]
        key: Option<String>,
    },

    /// Split the document into its keys and its values
    Divide,

    /// Every combination of one element from each list
    CrossJoin,

    /// Sort the document recursively
    Sort,

    /// Sort the elements by the value at a path inside each of them
    SortBy {
        /// Path of the sort key inside each element
        path: String,
    },

    /// Pick random elements
    Random {
        /// Number of elements; a single element is printed bare when omitted
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Shuffle the elements into a new list
    Shuffle,

    /// Print the first element
    First {
        /// Value printed when the document has no elements
        #[arg(long, value_name = "VALUE")]
        default: Option<String>,
    },

    /// Print the last element
    Last {
        /// Value printed when the document has no elements
        #[arg(long, value_name = "VALUE")]
        default: Option<String>,
    },

    /// Put a value at the front of the document
    Prepend {
        /// Value to insert (JSON, or a plain string)
        value: String,

        /// Key for the inserted value
        #[arg(long)]
        key: Option<String>,
    },

    /// Wrap a scalar document in a list
    Wrap,

    /// Print whether the document is an object with non-positional keys
    IsAssoc,
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Get { .. } => "get",
            Commands::Has { .. } => "has",
            Commands::Set { .. } => "set",
            Commands::Add { .. } => "add",
            Commands::Forget { .. } => "forget",
            Commands::Pull { .. } => "pull",
            Commands::Only { .. } => "only",
            Commands::Except { .. } => "except",
            Commands::Dot { .. } => "dot",
            Commands::Undot => "undot",
            Commands::Flatten { .. } => "flatten",
            Commands::Collapse => "collapse",
            Commands::Pluck { .. } => "pluck",
            Commands::Divide => "divide",
            Commands::CrossJoin => "cross-join",
            Commands::Sort => "sort",
            Commands::SortBy { .. } => "sort-by",
            Commands::Random { .. } => "random",
            Commands::Shuffle => "shuffle",
            Commands::First { .. } => "first",
            Commands::Last { .. } => "last",
            Commands::Prepend { .. } => "prepend",
            Commands::Wrap => "wrap",
            Commands::IsAssoc => "is-assoc",
        }
    }
}
