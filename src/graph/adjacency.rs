use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// An adjacency-list graph over dense `usize` vertex indices
///
/// Vertex indices are assigned in insertion order, which is also the order
/// the selection loop scans and the reporting order. Sized for small
/// graphs: neighbor lists are plain vectors and edge lookups are linear.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Neighbor lists for each vertex: vertex index -> [(neighbor, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph { adjacency: Vec::new() }
    }

    /// Creates a new graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        AdjacencyGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    fn check_endpoints(&self, a: usize, b: usize, weight: W) -> Result<()> {
        if !self.has_vertex(a) {
            return Err(Error::InvalidVertex(a));
        }
        if !self.has_vertex(b) {
            return Err(Error::InvalidVertex(b));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Inserts a single direction, updating the weight in place if the
    /// entry already exists.
    fn insert_arc(&mut self, from: usize, to: usize, weight: W) {
        let edges = &mut self.adjacency[from];
        if let Some(edge) = edges.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
        } else {
            edges.push((to, weight));
        }
    }
}

impl<W> Default for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to).is_some()
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        self.check_endpoints(a, b, weight)?;
        self.insert_arc(a, b, weight);
        // A self-loop stores a single entry.
        if a != b {
            self.insert_arc(b, a, weight);
        }
        Ok(())
    }

    fn add_arc(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_endpoints(from, to, weight)?;
        self.insert_arc(from, to, weight);
        Ok(())
    }
}
