//! Tag-overlap similarity graph
//!
//! - `builder`: construct the graph from a catalog
//! - `neighbors`: thresholded one-hop neighbor queries
//! - `algos`: weighted shortest-path similarity
//! - `export`: full vertex and edge lists for reporting
//! - `traversal`: provider trait the algorithms read through

pub mod algos;
pub mod builder;
pub mod export;
pub mod neighbors;
pub mod traversal;
pub mod types;

pub use algos::{distance, shortest_path};
pub use builder::build;
pub use export::{export, GraphExport};
pub use neighbors::{max_weight_cutoff, neighbor_details, neighbors, Neighbor};
pub use traversal::GraphProvider;
pub use types::{Distance, Edge, EdgeWeight, PathHop, PathResult, SimilarityGraph, Vertex};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_graph_is_shareable_across_threads() {
        assert_send_sync::<SimilarityGraph>();
    }
}
