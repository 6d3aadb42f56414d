//! Graph algorithm implementations
//!
//! - `dijkstra`: weighted shortest-path distance and path reconstruction

pub mod dijkstra;

pub use dijkstra::{distance, shortest_path};
