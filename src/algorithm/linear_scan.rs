use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::table::ResultTable;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// The reference label-setting engine
///
/// Selects the next vertex by a linear scan over the unvisited set, O(V^2)
/// overall. For the small graphs this crate targets the scan beats heap
/// bookkeeping and keeps the tie-break rule trivial to state: among equally
/// close unvisited vertices, the first one in index (insertion) order wins.
/// Predecessor choice on tied paths follows from that rule.
#[derive(Debug, Default)]
pub struct LinearScan;

impl LinearScan {
    /// Creates a new LinearScan algorithm instance
    pub fn new() -> Self {
        LinearScan
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for LinearScan
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "LinearScan"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        // Per-run state: the tentative table and the visited/unvisited
        // partition. Nothing outlives this call, so concurrent runs over
        // the same graph are safe.
        let mut table = ResultTable::new(graph.vertex_count());
        let mut visited = vec![false; graph.vertex_count()];

        table.set_source(source)?;
        visit(graph, &mut table, &mut visited, source)?;

        // Settle the closest unvisited vertex until none with a finite
        // distance remains; whatever is left is unreachable and keeps the
        // sentinel distance with no predecessor.
        while let Some(next) = closest_unvisited(&table, &visited) {
            visit(graph, &mut table, &mut visited, next)?;
        }

        Ok(table.into_result(source))
    }
}

/// First-seen minimum finite distance over the unvisited vertices
fn closest_unvisited<W>(table: &ResultTable<W>, visited: &[bool]) -> Option<usize>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    let mut best: Option<(usize, W)> = None;
    for vertex in 0..visited.len() {
        if visited[vertex] {
            continue;
        }
        if let Some(distance) = table.distance(vertex) {
            // Strict comparison keeps the first minimum encountered.
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((vertex, distance));
            }
        }
    }
    best.map(|(vertex, _)| vertex)
}

/// Settles a vertex: relaxes every unvisited neighbor, then moves the
/// vertex into the visited set
///
/// A no-op when the vertex has already been visited.
fn visit<W, G>(
    graph: &G,
    table: &mut ResultTable<W>,
    visited: &mut [bool],
    vertex: usize,
) -> Result<()>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    if visited[vertex] {
        return Ok(());
    }

    // Only vertices with a finite tentative distance are ever selected, so
    // candidates below always start from a finite value, never the
    // sentinel.
    let distance = match table.distance(vertex) {
        Some(distance) => distance,
        None => return Ok(()),
    };

    for (neighbor, weight) in graph.neighbors(vertex) {
        if !visited[neighbor] {
            table.relax(neighbor, distance + weight, vertex)?;
        }
    }

    visited[vertex] = true;
    Ok(())
}
