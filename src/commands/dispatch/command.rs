//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use tagpath_core::bail_usage;
use tagpath_core::catalog::{self, Catalog};
use tagpath_core::config::TagpathConfig;
use tagpath_core::error::Result;
use tagpath_core::graph::{build, SimilarityGraph};

/// Configuration and catalog loaded for one invocation
pub struct Session {
    pub config: TagpathConfig,
    pub catalog: Catalog,
}

impl Session {
    /// Build the similarity graph over the loaded catalog
    pub fn graph(&self) -> SimilarityGraph {
        build(&self.catalog)
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a Path, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    pub fn load_config(&self) -> Result<TagpathConfig> {
        let config = TagpathConfig::discover(self.cli.config.as_deref(), self.cwd)?;
        debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(config)
    }

    /// Load configuration, then the catalog it (or `--catalog`) points at
    pub fn open_session(&self) -> Result<Session> {
        let config = self.load_config()?;
        let path = self.catalog_path(&config)?;

        let (catalog, report) = catalog::load_json(&path, &config.ingest_options())?;
        debug!(
            elapsed = ?self.start.elapsed(),
            loaded = report.loaded,
            skipped = report.skipped,
            "load_catalog"
        );

        if report.skipped > 0 && !self.cli.quiet && self.cli.format == OutputFormat::Human {
            eprintln!(
                "warning: skipped {} malformed record(s) in {}",
                report.skipped,
                path.display()
            );
        }

        Ok(Session { config, catalog })
    }

    fn catalog_path(&self, config: &TagpathConfig) -> Result<PathBuf> {
        let path = match (&self.cli.catalog, &config.catalog.path) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => PathBuf::from(path),
            (None, None) => bail_usage!(
                "no catalog given: pass --catalog <PATH> or set [catalog] path in tagpath.toml"
            ),
        };

        if path.is_absolute() {
            Ok(path)
        } else {
            Ok(self.cwd.join(path))
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("tagpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Similarity graph over programming problems that share topic tags.");
        println!();
        println!("Run `tagpath --help` for usage information.");
        Ok(())
    }
}
