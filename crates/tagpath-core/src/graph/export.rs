//! Graph export for reporting and visualization collaborators

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::graph::types::{Edge, SimilarityGraph, Vertex};

/// Full vertex and edge lists of a built graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphExport {
    pub generated_at: DateTime<Utc>,
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Ascending by id
    pub vertices: Vec<Vertex>,
    /// Each undirected edge once, `source < target`, ascending
    pub edges: Vec<Edge>,
}

pub fn export(graph: &SimilarityGraph) -> GraphExport {
    GraphExport {
        generated_at: Utc::now(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        vertices: graph.vertices().cloned().collect(),
        edges: graph.edges(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::graph::build;
    use crate::item::{Difficulty, ItemRecord};

    fn sample_graph() -> SimilarityGraph {
        let items = vec![
            ItemRecord::new(2, "Add Two Numbers", Some(Difficulty::Medium), 41.0, ["Linked List", "Math"])
                .unwrap(),
            ItemRecord::new(1, "Two Sum", Some(Difficulty::Easy), 52.7, ["Array", "Math"]).unwrap(),
            ItemRecord::new(3, "Lonely", None, 10.0, ["Graph"]).unwrap(),
        ];
        build(&Catalog::from_records(items).unwrap())
    }

    #[test]
    fn test_export_lists_everything() {
        let exported = export(&sample_graph());
        assert_eq!(exported.vertex_count, 3);
        assert_eq!(exported.edge_count, 1);

        let ids: Vec<u32> = exported.vertices.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(exported.edges.len(), 1);
        assert_eq!((exported.edges[0].source, exported.edges[0].target), (1, 2));
        assert_eq!(exported.edges[0].weight, 1.0);
    }

    #[test]
    fn test_export_json_shape() {
        let json = serde_json::to_value(export(&sample_graph())).unwrap();

        assert!(json["generated_at"].is_string());
        assert_eq!(json["vertices"][0]["title"], "Two Sum");
        assert_eq!(json["vertices"][0]["difficulty"], "Easy");
        assert_eq!(json["vertices"][0]["tags"], serde_json::json!(["Array", "Math"]));
        assert!(json["vertices"][2]["difficulty"].is_null());
        assert!(json["vertices"][0].get("position").is_none());
        assert_eq!(json["edges"][0]["shared_tags"], 1);
    }
}
