//! `tagpath export` command - full vertex and edge lists
//!
//! Human and JSON formats both emit the JSON document; records emits
//! `N` lines for vertices followed by `E` lines for edges.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::Session;
use tagpath_core::error::Result;
use tagpath_core::graph::{export, GraphExport};
use tagpath_core::records::{format_edge_record, format_header, format_vertex_record};

/// Execute the export command
pub fn execute(cli: &Cli, session: &Session, output: Option<&Path>) -> Result<()> {
    let exported = export(&session.graph());

    let document = match cli.format {
        OutputFormat::Human | OutputFormat::Json => serde_json::to_string_pretty(&exported)?,
        OutputFormat::Records => render_records(&exported),
    };

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", document))?;
            debug!(path = %path.display(), bytes = document.len(), "export_written");
            if cli.format == OutputFormat::Human && !cli.quiet {
                println!(
                    "Exported {} vertices and {} edges to {}",
                    exported.vertex_count,
                    exported.edge_count,
                    path.display()
                );
            }
        }
        None => println!("{}", document),
    }

    Ok(())
}

fn render_records(exported: &GraphExport) -> String {
    let mut lines = Vec::with_capacity(1 + exported.vertices.len() + exported.edges.len());
    lines.push(format_header(
        "export",
        &[
            ("generated_at", exported.generated_at.to_rfc3339()),
            ("vertices", exported.vertex_count.to_string()),
            ("edges", exported.edge_count.to_string()),
        ],
    ));
    lines.extend(exported.vertices.iter().map(format_vertex_record));
    lines.extend(exported.edges.iter().map(format_edge_record));
    lines.join("\n")
}
