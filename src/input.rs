//! JSON boundary for describing graphs
//!
//! Callers describe vertices by name and edges by endpoint names; building
//! resolves names to indices once, so the engine never sees a string.

use log::debug;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::graph::named::NamedGraph;
use crate::Result;

/// A graph description as it appears on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphFile {
    /// Vertex names; indices are assigned in this order
    pub vertices: Vec<String>,

    /// Weighted edges by endpoint name
    pub edges: Vec<EdgeSpec>,

    /// When true, each edge is a single-direction arc
    #[serde(default)]
    pub directed: bool,
}

/// One weighted relationship between two named vertices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub a: String,
    pub b: String,
    pub weight: f64,
}

/// Parses a JSON graph description and builds the graph
pub fn load_graph<R: Read>(reader: R) -> Result<NamedGraph<OrderedFloat<f64>>> {
    let file: GraphFile = serde_json::from_reader(reader)?;
    build_graph(&file)
}

/// Builds a graph from an already-parsed description
pub fn build_graph(file: &GraphFile) -> Result<NamedGraph<OrderedFloat<f64>>> {
    let mut graph = NamedGraph::new();
    for name in &file.vertices {
        graph.add_vertex(name)?;
    }
    for edge in &file.edges {
        let weight = OrderedFloat(edge.weight);
        if file.directed {
            graph.add_arc(&edge.a, &edge.b, weight)?;
        } else {
            graph.add_edge(&edge.a, &edge.b, weight)?;
        }
    }
    debug!(
        "built graph: {} vertices, {} edges, directed={}",
        file.vertices.len(),
        file.edges.len(),
        file.directed
    );
    Ok(graph)
}

/// The fixed five-vertex demo graph the CLI runs by default
pub fn reference_graph() -> Result<NamedGraph<OrderedFloat<f64>>> {
    let mut graph = NamedGraph::new();
    for name in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(name)?;
    }
    graph.add_edge("A", "B", OrderedFloat(6.0))?;
    graph.add_edge("A", "D", OrderedFloat(1.0))?;
    graph.add_edge("B", "C", OrderedFloat(5.0))?;
    graph.add_edge("B", "D", OrderedFloat(2.0))?;
    graph.add_edge("B", "E", OrderedFloat(2.0))?;
    graph.add_edge("C", "E", OrderedFloat(5.0))?;
    graph.add_edge("D", "E", OrderedFloat(1.0))?;
    Ok(graph)
}
