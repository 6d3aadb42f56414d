use crate::graph::types::{EdgeWeight, SimilarityGraph, Vertex};

/// Trait for providing graph adjacency and vertex metadata to the algorithms
pub trait GraphProvider {
    /// Direct neighbors of `id` with edge weights, in ascending id order
    fn adjacent_edges(&self, id: u32) -> Vec<(u32, EdgeWeight)>;
    fn get_vertex(&self, id: u32) -> Option<&Vertex>;

    fn contains(&self, id: u32) -> bool {
        self.get_vertex(id).is_some()
    }
}

impl GraphProvider for SimilarityGraph {
    fn adjacent_edges(&self, id: u32) -> Vec<(u32, EdgeWeight)> {
        self.adjacent(id)
            .map(|targets| targets.iter().map(|(&to, &w)| (to, w)).collect())
            .unwrap_or_default()
    }

    fn get_vertex(&self, id: u32) -> Option<&Vertex> {
        self.vertex(id)
    }
}
