//! Tagpath Core Library
//!
//! Builds a weighted similarity graph over a catalog of programming problems,
//! where two problems are adjacent when they share at least one tag, and
//! answers neighbor and path-similarity queries against it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod item;
pub mod links;
pub mod logging;
pub mod records;
pub mod stats;

pub use catalog::Catalog;
pub use graph::{build, distance, neighbors, Distance, SimilarityGraph};
pub use item::{Difficulty, ItemRecord};
