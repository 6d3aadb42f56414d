//! Similarity graph construction
//!
//! Every unordered pair of catalog items is compared; a pair sharing `k >= 1`
//! tags gets an edge of weight `1 / k`. Cost is O(N²) comparisons.

use std::time::Instant;

use tracing::debug;

use crate::catalog::Catalog;
use crate::graph::types::{EdgeWeight, SimilarityGraph, Vertex};

/// Build the similarity graph for a catalog snapshot.
///
/// Pure: the returned graph holds copies of the item attributes and is
/// unaffected by later changes to the catalog.
#[tracing::instrument(skip(catalog), fields(items = catalog.len()))]
pub fn build(catalog: &Catalog) -> SimilarityGraph {
    let start = Instant::now();
    let items = catalog.as_slice();
    let mut graph = SimilarityGraph::new();

    for (position, item) in items.iter().enumerate() {
        graph.add_vertex(Vertex::snapshot(item, position));
    }

    for (i, left) in items.iter().enumerate() {
        for right in &items[i + 1..] {
            let shared = u32::try_from(left.shared_tag_count(right)).unwrap_or(u32::MAX);
            if let Some(weight) = EdgeWeight::from_shared(shared) {
                graph.add_edge(left.id(), right.id(), weight);
            }
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed = ?start.elapsed(),
        "graph_built"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Difficulty, ItemRecord};

    fn item(id: u32, tags: &[&str]) -> ItemRecord {
        ItemRecord::new(
            id,
            format!("Problem {}", id),
            Some(Difficulty::Medium),
            40.0,
            tags.iter().copied(),
        )
        .unwrap()
    }

    fn catalog(items: Vec<ItemRecord>) -> Catalog {
        Catalog::from_records(items).unwrap()
    }

    #[test]
    fn test_empty_catalog_builds_empty_graph() {
        let graph = build(&Catalog::new());
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_end_to_end_example_edges() {
        let graph = build(&catalog(vec![
            item(1, &["A", "B"]),
            item(2, &["B", "C"]),
            item(3, &["D"]),
        ]));

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge(1, 2).map(|w| w.value()), Some(1.0));
        assert!(graph.edge(1, 3).is_none());
        assert!(graph.edge(2, 3).is_none());
        assert!(graph.adjacent(3).unwrap().is_empty());
    }

    #[test]
    fn test_weight_is_reciprocal_of_shared_count() {
        let graph = build(&catalog(vec![
            item(1, &["A", "B", "C", "D"]),
            item(2, &["A", "B", "C"]),
            item(3, &["A", "B"]),
        ]));

        assert_eq!(graph.edge(1, 2).unwrap().shared_tags(), 3);
        assert_eq!(graph.edge(1, 2).unwrap().value(), 1.0 / 3.0);
        assert_eq!(graph.edge(1, 3).unwrap().value(), 0.5);
        assert_eq!(graph.edge(2, 3).unwrap().value(), 0.5);
    }

    #[test]
    fn test_items_without_tags_are_isolated() {
        let graph = build(&catalog(vec![item(1, &[]), item(2, &[])]));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_vertex_snapshot_attributes() {
        let source = ItemRecord::new(42, "Trapping Rain Water", Some(Difficulty::Hard), 61.5, ["Array", "Stack"])
            .unwrap();
        let graph = build(&catalog(vec![source.clone()]));

        let vertex = graph.vertex(42).unwrap();
        assert_eq!(vertex.title, "Trapping Rain Water");
        assert_eq!(vertex.difficulty, Some(Difficulty::Hard));
        assert_eq!(vertex.acceptance_rate, 61.5);
        assert_eq!(&vertex.tags, source.tags());
        assert_eq!(vertex.position, 0);
    }

    #[test]
    fn test_graph_independent_of_catalog_order() {
        let forward = build(&catalog(vec![
            item(1, &["A", "B"]),
            item(2, &["B", "C"]),
            item(3, &["A", "C"]),
        ]));
        let reversed = build(&catalog(vec![
            item(3, &["A", "C"]),
            item(2, &["B", "C"]),
            item(1, &["A", "B"]),
        ]));

        assert_eq!(forward.edges(), reversed.edges());
    }

    #[test]
    fn test_rebuild_yields_independent_graph() {
        let mut items = vec![item(1, &["A"]), item(2, &["A"])];
        let first = build(&catalog(items.clone()));

        items.push(item(3, &["A"]));
        let second = build(&catalog(items));

        assert_eq!(first.vertex_count(), 2);
        assert_eq!(first.edge_count(), 1);
        assert_eq!(second.vertex_count(), 3);
        assert_eq!(second.edge_count(), 3);
    }
}
