//! Command dispatch logic for tagpath

use std::env;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use tagpath_core::error::Result;

mod command;
mod commands;

pub use command::Session;
use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;

    debug!(elapsed = ?start.elapsed(), cwd = %cwd.display(), "resolve_cwd");

    let ctx = CommandContext::new(cli, &cwd, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
