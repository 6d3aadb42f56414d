//! One-hop neighbor queries
//!
//! A tag threshold `t` keeps edges of weight `<= 1 / t`, i.e. neighbors sharing
//! at least `t` tags. The comparison is made on the integer shared-tag count,
//! which is the same cutoff without float rounding.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{Result, TagpathError};
use crate::graph::types::{EdgeWeight, SimilarityGraph, Vertex};
use crate::item::Difficulty;

/// A qualifying neighbor with the attributes used for ordering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub id: u32,
    pub title: String,
    pub difficulty: Option<Difficulty>,
    pub acceptance_rate: f64,
    pub shared_tags: u32,
    pub weight: f64,
}

/// Maximum edge weight admitted by a tag threshold
pub fn max_weight_cutoff(tag_threshold: u32) -> Result<f64> {
    validate_threshold(tag_threshold)?;
    Ok(1.0 / f64::from(tag_threshold))
}

fn validate_threshold(tag_threshold: u32) -> Result<()> {
    if tag_threshold == 0 {
        return Err(TagpathError::InvalidThreshold {
            value: tag_threshold,
        });
    }
    Ok(())
}

/// Ids of the direct neighbors of `source_id` sharing at least
/// `tag_threshold` tags, easiest first, then highest acceptance first.
pub fn neighbors(graph: &SimilarityGraph, source_id: u32, tag_threshold: u32) -> Result<Vec<u32>> {
    Ok(neighbor_details(graph, source_id, tag_threshold)?
        .into_iter()
        .map(|n| n.id)
        .collect())
}

/// Same query as [`neighbors`], returning the neighbor attributes.
///
/// Errors with [`TagpathError::VertexNotFound`] when `source_id` is not in the
/// graph. An existing vertex without qualifying neighbors yields `Ok(vec![])`.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn neighbor_details(
    graph: &SimilarityGraph,
    source_id: u32,
    tag_threshold: u32,
) -> Result<Vec<Neighbor>> {
    validate_threshold(tag_threshold)?;

    let adjacent = graph
        .adjacent(source_id)
        .ok_or(TagpathError::VertexNotFound { id: source_id })?;

    let mut qualifying: Vec<(&Vertex, EdgeWeight)> = adjacent
        .iter()
        .filter(|(_, weight)| weight.shared_tags() >= tag_threshold)
        .filter_map(|(&id, &weight)| graph.vertex(id).map(|v| (v, weight)))
        .collect();

    qualifying.sort_by(|(a, _), (b, _)| compare_vertices(a, b));

    tracing::debug!(
        source = source_id,
        threshold = tag_threshold,
        found = qualifying.len(),
        "neighbors"
    );

    Ok(qualifying
        .into_iter()
        .map(|(vertex, weight)| Neighbor {
            id: vertex.id,
            title: vertex.title.clone(),
            difficulty: vertex.difficulty,
            acceptance_rate: vertex.acceptance_rate,
            shared_tags: weight.shared_tags(),
            weight: weight.value(),
        })
        .collect())
}

/// Difficulty ascending (missing first), acceptance descending, then catalog order
fn compare_vertices(a: &Vertex, b: &Vertex) -> Ordering {
    Difficulty::sort_rank(a.difficulty)
        .cmp(&Difficulty::sort_rank(b.difficulty))
        .then_with(|| b.acceptance_rate.total_cmp(&a.acceptance_rate))
        .then_with(|| a.position.cmp(&b.position))
}
