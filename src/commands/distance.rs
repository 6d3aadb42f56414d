//! `tagpath distance` command - weighted shortest-path similarity
//!
//! Smaller distances mean more similar problems; disconnected problems have
//! no path at all, which is reported rather than treated as an error.

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::Session;
use tagpath_core::error::Result;
use tagpath_core::format::format_distance;
use tagpath_core::graph::{distance, shortest_path, PathResult};
use tagpath_core::records::{format_header, format_hop_record};

/// Execute the distance command
pub fn execute(cli: &Cli, session: &Session, from: u32, to: u32, with_path: bool) -> Result<()> {
    let graph = session.graph();

    if with_path {
        let path = shortest_path(&graph, from, to)?;
        return output_path(cli, session, &path);
    }

    let d = distance(&graph, from, to)?;
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "reachable": d.is_reachable(),
                // JSON has no infinity; unreachable pairs carry null
                "distance": d.is_reachable().then(|| d.value()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if d.is_reachable() {
                println!("{}", format_distance(d.value()));
            } else if cli.quiet {
                println!("inf");
            } else {
                println!("No path between {} and {}", from, to);
            }
        }
        OutputFormat::Records => {
            println!("{}", distance_header(from, to, d.is_reachable(), d.value()));
        }
    }

    Ok(())
}

fn distance_header(from: u32, to: u32, reachable: bool, value: f64) -> String {
    format_header(
        "distance",
        &[
            ("from", from.to_string()),
            ("to", to.to_string()),
            ("reachable", reachable.to_string()),
            ("distance", format_distance(value)),
        ],
    )
}

fn output_path(cli: &Cli, session: &Session, path: &PathResult) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(path)?);
        }
        OutputFormat::Human => {
            let Some(total) = path.distance else {
                println!("No path between {} and {}", path.from, path.to);
                return Ok(());
            };
            println!("{}", format_distance(total));
            for hop in &path.hops {
                let title = session.catalog.get(hop.to).map_or("", |item| item.title());
                println!(
                    "  {} -> {} {} (shared {}, weight {})",
                    hop.from,
                    hop.to,
                    title,
                    hop.shared_tags,
                    format_distance(hop.weight)
                );
            }
        }
        OutputFormat::Records => {
            let total = path.distance.unwrap_or(f64::INFINITY);
            println!("{}", distance_header(path.from, path.to, path.found, total));
            for hop in &path.hops {
                println!("{}", format_hop_record(hop));
            }
        }
    }
    Ok(())
}
