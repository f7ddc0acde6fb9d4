use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::Result;

/// Trait representing a weighted graph addressed by dense vertex indices
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored adjacency entries
    ///
    /// An undirected edge contributes one entry per direction.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the neighbors of a vertex with edge weights
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge from `from` to `to`
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for graph construction
///
/// Construction must be complete before a path-finding run begins; a run
/// borrows the graph immutably for its whole duration.
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its index
    fn add_vertex(&mut self) -> usize;

    /// Adds an undirected edge (both directions) with the given weight
    fn add_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()>;

    /// Adds a directed edge with the given weight
    fn add_arc(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
