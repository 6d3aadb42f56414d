//! Utilities for records output format
//!
//! Line prefixes:
//! - `H` header
//! - `N` vertex / neighbor
//! - `E` edge
//! - `P` path hop
//! - `T` tag statistic

use crate::format::{difficulty_label, format_distance};
use crate::graph::{Edge, Neighbor, PathHop, Vertex};

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Comma-separated tag list, `-` when empty. Spaces inside tags are kept.
pub fn tags_csv<'a>(tags: impl IntoIterator<Item = &'a String>) -> String {
    let joined = tags
        .into_iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(",");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

/// Format a header line: `H <kind> key=value ...`
pub fn format_header(kind: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H {}", kind);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Format a vertex line
pub fn format_vertex_record(vertex: &Vertex) -> String {
    format!(
        "N {} {} ac={:.2} \"{}\" tags=\"{}\"",
        vertex.id,
        difficulty_label(vertex.difficulty),
        vertex.acceptance_rate,
        escape_quotes(&vertex.title),
        escape_quotes(&tags_csv(&vertex.tags))
    )
}

/// Format a neighbor line, keeping its rank in the result
pub fn format_neighbor_record(rank: usize, neighbor: &Neighbor) -> String {
    format!(
        "N {} {} ac={:.2} shared={} rank={} \"{}\"",
        neighbor.id,
        difficulty_label(neighbor.difficulty),
        neighbor.acceptance_rate,
        neighbor.shared_tags,
        rank,
        escape_quotes(&neighbor.title)
    )
}

/// Format an edge line
pub fn format_edge_record(edge: &Edge) -> String {
    format!(
        "E {} {} shared={} weight={}",
        edge.source,
        edge.target,
        edge.shared_tags,
        format_distance(edge.weight)
    )
}

/// Format a path hop line
pub fn format_hop_record(hop: &PathHop) -> String {
    format!(
        "P {} {} shared={} weight={}",
        hop.from,
        hop.to,
        hop.shared_tags,
        format_distance(hop.weight)
    )
}

/// Format a tag statistic line
pub fn format_tag_record(kind: &str, tag: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("T {} \"{}\"", kind, escape_quotes(tag));
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}
