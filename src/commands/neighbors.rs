//! `tagpath neighbors` command - thresholded one-hop neighbors
//!
//! Neighbors share at least `--threshold` tags with the source and are listed
//! easiest first, then by acceptance rate (highest first).

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::Session;
use tagpath_core::error::Result;
use tagpath_core::format::{difficulty_label, format_distance, format_rate};
use tagpath_core::graph::{max_weight_cutoff, neighbor_details, Neighbor};
use tagpath_core::records::{format_header, format_neighbor_record};

/// Execute the neighbors command
pub fn execute(cli: &Cli, session: &Session, id: u32, threshold: u32) -> Result<()> {
    let graph = session.graph();
    let found = neighbor_details(&graph, id, threshold)?;
    let cutoff = max_weight_cutoff(threshold)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": id,
                "threshold": threshold,
                "max_weight": cutoff,
                "count": found.len(),
                "neighbors": found,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(cli, session, id, threshold, &found),
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "neighbors",
                    &[
                        ("source", id.to_string()),
                        ("threshold", threshold.to_string()),
                        ("max_weight", format_distance(cutoff)),
                        ("count", found.len().to_string()),
                    ],
                )
            );
            for (rank, neighbor) in found.iter().enumerate() {
                println!("{}", format_neighbor_record(rank + 1, neighbor));
            }
        }
    }

    Ok(())
}

fn output_human(cli: &Cli, session: &Session, id: u32, threshold: u32, found: &[Neighbor]) {
    let title = session.catalog.get(id).map_or("", |item| item.title());

    if found.is_empty() {
        if !cli.quiet {
            println!(
                "No neighbors of {} ({}) share at least {} tag(s)",
                id, title, threshold
            );
        }
        return;
    }

    if !cli.quiet {
        println!(
            "Neighbors of {} ({}) sharing at least {} tag(s):",
            id, title, threshold
        );
    }
    for (rank, n) in found.iter().enumerate() {
        println!(
            "{:>3}. [{}] {} {} (ac {}, shared {}, weight {})",
            rank + 1,
            difficulty_label(n.difficulty),
            n.id,
            n.title,
            format_rate(n.acceptance_rate),
            n.shared_tags,
            format_distance(n.weight)
        );
    }
}
