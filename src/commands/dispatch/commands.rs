//! Command implementations for all tagpath commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use tagpath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use tracing::debug;

    use crate::cli::commands::{
        DistanceArgs, ExportArgs, LinkArgs, NeighborsArgs, ShowArgs, StatsArgs,
    };
    use crate::commands::{distance, export, link, neighbors, show, stats};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        let result = match cmd {
            Commands::Neighbors(args) => execute_neighbors(ctx, args),
            Commands::Distance(args) => execute_distance(ctx, args),
            Commands::Show(args) => execute_show(ctx, args),
            Commands::Export(args) => execute_export(ctx, args),
            Commands::Stats(args) => execute_stats(ctx, args),
            Commands::Link(args) => execute_link(ctx, args),
        };
        debug!(elapsed = ?ctx.start.elapsed(), ok = result.is_ok(), "command_done");
        result
    }

    fn execute_neighbors(ctx: &CommandContext, args: &NeighborsArgs) -> Result<()> {
        let session = ctx.open_session()?;
        let threshold = args
            .threshold
            .unwrap_or(session.config.graph.default_tag_threshold);
        neighbors::execute(ctx.cli, &session, args.id, threshold)
    }

    fn execute_distance(ctx: &CommandContext, args: &DistanceArgs) -> Result<()> {
        let session = ctx.open_session()?;
        distance::execute(ctx.cli, &session, args.from, args.to, args.path)
    }

    fn execute_show(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
        let session = ctx.open_session()?;
        show::execute(ctx.cli, &session, args.id)
    }

    fn execute_export(ctx: &CommandContext, args: &ExportArgs) -> Result<()> {
        let session = ctx.open_session()?;
        export::execute(ctx.cli, &session, args.output.as_deref())
    }

    fn execute_stats(ctx: &CommandContext, args: &StatsArgs) -> Result<()> {
        let session = ctx.open_session()?;
        let top = args.top.unwrap_or(session.config.stats.top);
        stats::execute(ctx.cli, &session, top)
    }

    fn execute_link(ctx: &CommandContext, args: &LinkArgs) -> Result<()> {
        let session = ctx.open_session()?;
        let locale = args.locale.unwrap_or(session.config.links.locale);
        link::execute(ctx.cli, &session, args.id, locale)
    }
}
