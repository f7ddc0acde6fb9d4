use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A graph with a name-to-index table at the construction and reporting
/// boundary.
///
/// The engine works on dense indices only; names never reach the
/// algorithm. Indices are assigned in registration order.
#[derive(Debug, Clone)]
pub struct NamedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    graph: AdjacencyGraph<W>,
    names: Vec<String>,
    indices: HashMap<String, usize>,
}

impl<W> NamedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        NamedGraph {
            graph: AdjacencyGraph::new(),
            names: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// Registers a vertex under `name` and returns its index
    ///
    /// Registering the same name twice is malformed input.
    pub fn add_vertex(&mut self, name: &str) -> Result<usize> {
        if self.indices.contains_key(name) {
            return Err(Error::DuplicateVertex(name.to_string()));
        }
        let index = self.graph.add_vertex();
        self.names.push(name.to_string());
        self.indices.insert(name.to_string(), index);
        Ok(index)
    }

    /// Adds an undirected edge between two named vertices
    pub fn add_edge(&mut self, a: &str, b: &str, weight: W) -> Result<()> {
        let (a, b) = (self.lookup(a)?, self.lookup(b)?);
        self.graph.add_edge(a, b, weight)
    }

    /// Adds a directed edge between two named vertices
    pub fn add_arc(&mut self, from: &str, to: &str, weight: W) -> Result<()> {
        let (from, to) = (self.lookup(from)?, self.lookup(to)?);
        self.graph.add_arc(from, to, weight)
    }

    /// Resolves a vertex name to its index
    pub fn lookup(&self, name: &str) -> Result<usize> {
        self.indices
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownVertex(name.to_string()))
    }

    /// Returns the name a vertex index was registered under
    pub fn name_of(&self, vertex: usize) -> Result<&str> {
        self.names
            .get(vertex)
            .map(String::as_str)
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// All vertex names in registration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// The underlying index-addressed graph the engine runs on
    pub fn graph(&self) -> &AdjacencyGraph<W> {
        &self.graph
    }
}

impl<W> Default for NamedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
