use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::item::{Difficulty, ItemRecord};

/// Weight of an edge between two items sharing tags.
///
/// Stored as the shared-tag count so the weight is always the exact
/// reciprocal `1 / shared`; lower weight means stronger similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeWeight(u32);

impl EdgeWeight {
    /// Weight for `shared` common tags. Returns `None` when nothing is shared,
    /// since "no shared tag" is represented by the absence of an edge.
    pub fn from_shared(shared: u32) -> Option<Self> {
        (shared > 0).then_some(EdgeWeight(shared))
    }

    pub fn shared_tags(&self) -> u32 {
        self.0
    }

    pub fn value(&self) -> f64 {
        1.0 / f64::from(self.0)
    }
}

/// Vertex attributes copied out of the catalog at build time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    pub id: u32,
    pub title: String,
    pub difficulty: Option<Difficulty>,
    pub acceptance_rate: f64,
    pub tags: BTreeSet<String>,
    /// Catalog position, the last-resort ordering key
    #[serde(skip)]
    pub position: usize,
}

impl Vertex {
    pub fn snapshot(item: &ItemRecord, position: usize) -> Self {
        Vertex {
            id: item.id(),
            title: item.title().to_string(),
            difficulty: item.difficulty(),
            acceptance_rate: item.acceptance_rate(),
            tags: item.tags().clone(),
            position,
        }
    }
}

/// Undirected edge as exposed to exporters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub source: u32,
    pub target: u32,
    pub shared_tags: u32,
    pub weight: f64,
}

/// Undirected weighted similarity graph over item ids.
///
/// Built once by [`crate::graph::build`] and read-only afterwards; a rebuild
/// yields a new instance. Adjacency is stored in both directions.
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    vertices: BTreeMap<u32, Vertex>,
    adjacency: BTreeMap<u32, BTreeMap<u32, EdgeWeight>>,
    edge_count: usize,
}

impl SimilarityGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_vertex(&mut self, vertex: Vertex) {
        self.adjacency.entry(vertex.id).or_default();
        self.vertices.insert(vertex.id, vertex);
    }

    /// Insert an undirected edge. Self-loops and repeated pairs are ignored.
    pub(crate) fn add_edge(&mut self, a: u32, b: u32, weight: EdgeWeight) {
        if a == b || !self.vertices.contains_key(&a) || !self.vertices.contains_key(&b) {
            return;
        }
        if self.adjacency.entry(a).or_default().insert(b, weight).is_none() {
            self.edge_count += 1;
        }
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    pub fn contains(&self, id: u32) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex(&self, id: u32) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Vertices in ascending id order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Weight of the edge between `a` and `b`, if any
    pub fn edge(&self, a: u32, b: u32) -> Option<EdgeWeight> {
        self.adjacency.get(&a)?.get(&b).copied()
    }

    /// Direct neighbors of `id` with edge weights, ascending by neighbor id
    pub fn adjacent(&self, id: u32) -> Option<&BTreeMap<u32, EdgeWeight>> {
        self.adjacency.get(&id)
    }

    /// Every edge once, with `source < target`, ordered by (source, target)
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flat_map(|(&source, targets)| {
                targets
                    .range(source.saturating_add(1)..)
                    .map(move |(&target, weight)| Edge {
                        source,
                        target,
                        shared_tags: weight.shared_tags(),
                        weight: weight.value(),
                    })
            })
            .collect()
    }
}

/// Result of a weighted shortest-path query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// Minimum total edge weight between the two vertices
    Reachable(f64),
    /// The vertices lie in different components
    NoPath,
}

impl Distance {
    /// Numeric value, `f64::INFINITY` when there is no path
    pub fn value(&self) -> f64 {
        match self {
            Distance::Reachable(d) => *d,
            Distance::NoPath => f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reachable(_))
    }
}

/// One step of a shortest path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathHop {
    pub from: u32,
    pub to: u32,
    pub shared_tags: u32,
    pub weight: f64,
}

/// Path result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub from: u32,
    pub to: u32,
    pub found: bool,
    /// Total weight, `None` when no path exists
    pub distance: Option<f64>,
    pub vertices: Vec<u32>,
    pub hops: Vec<PathHop>,
}
