use super::*;
use crate::catalog::Catalog;
use crate::graph::types::{SimilarityGraph, Vertex};
use crate::graph::build;
use crate::item::{Difficulty, ItemRecord};
use std::collections::BTreeMap;

fn item(id: u32, tags: &[&str]) -> ItemRecord {
    ItemRecord::new(
        id,
        format!("Problem {}", id),
        Some(Difficulty::Easy),
        50.0,
        tags.iter().copied(),
    )
    .unwrap()
}

fn graph_of(items: Vec<ItemRecord>) -> SimilarityGraph {
    build(&Catalog::from_records(items).unwrap())
}

/// Two cheap hops beat one expensive direct edge:
/// 1-2 share {X} (1.0), 1-3 and 3-2 each share three tags (1/3).
fn detour_graph() -> SimilarityGraph {
    graph_of(vec![
        item(1, &["A", "B", "C", "X"]),
        item(2, &["D", "E", "F", "X"]),
        item(3, &["A", "B", "C", "D", "E", "F"]),
        item(4, &["Lonely"]),
    ])
}

/// Provider over a hand-written adjacency list
struct ListProvider {
    vertices: BTreeMap<u32, Vertex>,
    edges: BTreeMap<u32, Vec<(u32, EdgeWeight)>>,
}

impl ListProvider {
    fn new(edges: &[(u32, u32, u32)]) -> Self {
        let mut provider = ListProvider {
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
        };
        for &(a, b, shared) in edges {
            let weight = EdgeWeight::from_shared(shared).unwrap();
            provider.edges.entry(a).or_default().push((b, weight));
            provider.edges.entry(b).or_default().push((a, weight));
            for id in [a, b] {
                provider.vertices.entry(id).or_insert_with(|| Vertex {
                    id,
                    title: format!("V{}", id),
                    difficulty: None,
                    acceptance_rate: 0.0,
                    tags: Default::default(),
                    position: id as usize,
                });
            }
        }
        provider
    }
}

impl GraphProvider for ListProvider {
    fn adjacent_edges(&self, id: u32) -> Vec<(u32, EdgeWeight)> {
        self.edges.get(&id).cloned().unwrap_or_default()
    }

    fn get_vertex(&self, id: u32) -> Option<&Vertex> {
        self.vertices.get(&id)
    }
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node_id: 1,
        accumulated_cost: 0.5,
    };
    let entry2 = HeapEntry {
        node_id: 2,
        accumulated_cost: 1.0,
    };
    let entry3 = HeapEntry {
        node_id: 3,
        accumulated_cost: 0.5,
    };

    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal costs fall back to node id
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    assert_eq!(entry1, entry1);
    assert_ne!(entry1, entry2);
}

#[test]
fn test_end_to_end_example() {
    let graph = graph_of(vec![
        item(1, &["A", "B"]),
        item(2, &["B", "C"]),
        item(3, &["D"]),
    ]);

    assert_eq!(distance(&graph, 1, 2).unwrap(), Distance::Reachable(1.0));
    assert_eq!(distance(&graph, 1, 3).unwrap(), Distance::NoPath);
}

#[test]
fn test_detour_is_cheaper_than_direct_edge() {
    let graph = detour_graph();
    assert_eq!(graph.edge(1, 2).unwrap().value(), 1.0);

    let d = distance(&graph, 1, 2).unwrap().value();
    assert!((d - 2.0 / 3.0).abs() < 1e-12, "got {}", d);
}

#[test]
fn test_reflexive() {
    let graph = detour_graph();
    for vertex in graph.vertices() {
        assert_eq!(
            distance(&graph, vertex.id, vertex.id).unwrap(),
            Distance::Reachable(0.0)
        );
    }
}

#[test]
fn test_symmetric_for_all_pairs() {
    let graph = graph_of(vec![
        item(1, &["A", "B", "C"]),
        item(2, &["B", "C", "D"]),
        item(3, &["C", "D", "E", "F"]),
        item(4, &["F", "G"]),
        item(5, &["G", "H", "A"]),
        item(6, &["Z"]),
    ]);

    let ids: Vec<u32> = graph.vertices().map(|v| v.id).collect();
    for &a in &ids {
        for &b in &ids {
            assert_eq!(
                distance(&graph, a, b).unwrap(),
                distance(&graph, b, a).unwrap(),
                "distance({}, {}) not symmetric",
                a,
                b
            );
        }
    }
}

#[test]
fn test_disconnected_components_have_no_path() {
    let graph = detour_graph();
    assert_eq!(distance(&graph, 1, 4).unwrap(), Distance::NoPath);
    assert!(distance(&graph, 4, 3).unwrap().value().is_infinite());
}

#[test]
fn test_unknown_vertex_is_distinct_from_no_path() {
    let graph = detour_graph();

    let err = distance(&graph, 1, 99).unwrap_err();
    assert!(matches!(err, TagpathError::UnknownVertex { id: 99 }));

    let err = distance(&graph, 77, 1).unwrap_err();
    assert!(matches!(err, TagpathError::UnknownVertex { id: 77 }));

    let err = shortest_path(&graph, 99, 99).unwrap_err();
    assert!(matches!(err, TagpathError::UnknownVertex { id: 99 }));
}

#[test]
fn test_empty_graph_rejects_any_id() {
    let graph = graph_of(Vec::new());
    assert!(matches!(
        distance(&graph, 1, 1).unwrap_err(),
        TagpathError::UnknownVertex { id: 1 }
    ));
}

#[test]
fn test_shortest_path_follows_detour() {
    let graph = detour_graph();
    let path = shortest_path(&graph, 1, 2).unwrap();

    assert!(path.found);
    assert_eq!(path.vertices, vec![1, 3, 2]);
    assert_eq!(path.hops.len(), 2);
    assert_eq!(path.hops[0].from, 1);
    assert_eq!(path.hops[0].to, 3);
    assert_eq!(path.hops[0].shared_tags, 3);
    assert_eq!(path.distance, Some(distance(&graph, 1, 2).unwrap().value()));
}

#[test]
fn test_shortest_path_reversed_direction() {
    let graph = detour_graph();
    let forward = shortest_path(&graph, 1, 2).unwrap();
    let backward = shortest_path(&graph, 2, 1).unwrap();

    assert_eq!(backward.vertices, vec![2, 3, 1]);
    assert_eq!(backward.hops[0].from, 2);
    assert_eq!(backward.hops[0].to, 3);
    assert_eq!(backward.hops[1].to, 1);
    assert_eq!(forward.distance, backward.distance);
}

#[test]
fn test_shortest_path_not_found() {
    let graph = detour_graph();
    let path = shortest_path(&graph, 2, 4).unwrap();
    assert!(!path.found);
    assert!(path.distance.is_none());
    assert!(path.vertices.is_empty());
    assert!(path.hops.is_empty());
}

#[test]
fn test_shortest_path_to_self() {
    let graph = detour_graph();
    let path = shortest_path(&graph, 3, 3).unwrap();
    assert!(path.found);
    assert_eq!(path.vertices, vec![3]);
    assert_eq!(path.distance, Some(0.0));
}

#[test]
fn test_custom_provider() {
    // 10 -(1.0)- 20 -(0.5)- 30 -(0.25)- 40 ; 10 -(1.0)- 40
    let provider = ListProvider::new(&[(10, 20, 1), (20, 30, 2), (30, 40, 4), (10, 40, 1)]);

    assert_eq!(distance(&provider, 10, 40).unwrap(), Distance::Reachable(1.0));
    assert_eq!(distance(&provider, 20, 40).unwrap(), Distance::Reachable(0.75));

    let path = shortest_path(&provider, 20, 40).unwrap();
    assert_eq!(path.vertices, vec![20, 30, 40]);
    assert_eq!(provider.get_vertex(30).map(|v| v.title.as_str()), Some("V30"));
}

#[test]
fn test_custom_provider_vertex_lookup_gates_queries() {
    let provider = ListProvider::new(&[(10, 20, 1)]);

    assert!(provider.contains(10));
    assert!(!provider.contains(30));
    assert!(matches!(
        distance(&provider, 10, 30).unwrap_err(),
        TagpathError::UnknownVertex { id: 30 }
    ));
}
