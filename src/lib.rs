//! Tinypath - greedy label-setting single-source shortest paths
//!
//! This library implements Dijkstra's algorithm over small, static graphs
//! with non-negative edge weights. The reference engine ([`LinearScan`])
//! selects the next vertex by scanning the unvisited set, which is O(V^2)
//! and deliberately simple; a binary-heap variant ([`Dijkstra`]) with
//! identical observable results is available for callers that prefer
//! O((V+E) log V).
//!
//! Graphs are built once, before any run, and are never mutated during a
//! run. All run state lives inside a single `compute_shortest_paths` call,
//! so several threads may search the same graph concurrently.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod input;
pub mod render;

pub use algorithm::{
    dijkstra::Dijkstra, linear_scan::LinearScan, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;
pub use graph::named::NamedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Malformed graph input: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
