//! Subcommands and their arguments

use std::path::PathBuf;

use clap::{Args, Subcommand};
use tagpath_core::links::Locale;

use crate::cli::parse::parse_locale;

/// Top-level tagpath commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List direct neighbors sharing at least N tags, easiest first
    Neighbors(NeighborsArgs),

    /// Weighted shortest-path distance between two problems
    Distance(DistanceArgs),

    /// Show a problem, its tags and its link
    Show(ShowArgs),

    /// Export every vertex and edge of the graph
    Export(ExportArgs),

    /// Tag frequency and acceptance statistics
    Stats(StatsArgs),

    /// Print the problem page URL
    Link(LinkArgs),
}

/// Arguments for the neighbors command.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    /// Problem id
    pub id: u32,

    /// Minimum number of shared tags (default from config, else 1)
    #[arg(long, short)]
    pub threshold: Option<u32>,
}

/// Arguments for the distance command.
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// Source problem id
    pub from: u32,

    /// Target problem id
    pub to: u32,

    /// Also print the hops of a shortest path
    #[arg(long)]
    pub path: bool,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Problem id
    pub id: u32,
}

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for the stats command.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Tags listed at each end of the acceptance ranking (default from config)
    #[arg(long)]
    pub top: Option<usize>,
}

/// Arguments for the link command.
#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Problem id
    pub id: u32,

    /// Site locale: en or cn (default from config)
    #[arg(long, value_parser = parse_locale)]
    pub locale: Option<Locale>,
}
