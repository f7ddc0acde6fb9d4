use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// An immutable snapshot of one run. `None` in `distances` is the "never
/// reached" sentinel; such vertices also have no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Shortest distance from the source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex index
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Reconstructs the shortest path from the source to `target` by
    /// following predecessor links
    ///
    /// Returns `None` when the target was never reached. The returned
    /// sequence starts at the source and ends at the target.
    pub fn path(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.distances.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
            // The predecessor links form a tree rooted at the source;
            // anything longer than the vertex count means a corrupted table.
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// True when the target was reached from the source
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distances.get(target).map_or(false, Option::is_some)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
