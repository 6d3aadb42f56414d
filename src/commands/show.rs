//! `tagpath show` command - display a problem and its place in the graph

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::Session;
use tagpath_core::error::{Result, TagpathError};
use tagpath_core::format::{difficulty_label, format_rate};
use tagpath_core::links::problem_link;
use tagpath_core::records::{format_header, format_vertex_record};

/// Execute the show command
pub fn execute(cli: &Cli, session: &Session, id: u32) -> Result<()> {
    let item = session
        .catalog
        .get(id)
        .ok_or(TagpathError::VertexNotFound { id })?;
    let graph = session.graph();
    let vertex = graph
        .vertex(id)
        .ok_or(TagpathError::VertexNotFound { id })?;
    let degree = graph.adjacent(id).map_or(0, |adjacent| adjacent.len());
    let link = problem_link(item, session.config.links.locale);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": vertex.id,
                "title": vertex.title,
                "slug": item.slug(),
                "difficulty": vertex.difficulty,
                "acceptance_rate": vertex.acceptance_rate,
                "tags": vertex.tags,
                "degree": degree,
                "link": link,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}. {}", vertex.id, vertex.title);
            println!("Difficulty: {}", difficulty_label(vertex.difficulty));
            println!("Acceptance: {}", format_rate(vertex.acceptance_rate));
            let tags: Vec<&str> = vertex.tags.iter().map(String::as_str).collect();
            if tags.is_empty() {
                println!("Tags: (none)");
            } else {
                println!("Tags: {}", tags.join(", "));
            }
            println!("Neighbors: {}", degree);
            println!("Link: {}", link);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "show",
                    &[("id", id.to_string()), ("degree", degree.to_string())]
                )
            );
            println!("{}", format_vertex_record(vertex));
        }
    }

    Ok(())
}
