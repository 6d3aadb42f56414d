//! CLI argument parsing for tagpath
//!
//! Global flags: --catalog, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod commands;
pub mod parse;

use std::path::PathBuf;

use clap::Parser;

pub use commands::Commands;
pub use tagpath_core::format::OutputFormat;

/// Tagpath - tag-overlap similarity graph over programming problems
#[derive(Parser, Debug)]
#[command(name = "tagpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog file: JSON array of problem records
    #[arg(long, global = true, env = "TAGPATH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Configuration file (default: ./tagpath.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse::parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (warn, debug, ...) or a full directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
