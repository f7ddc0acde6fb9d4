use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::table::ResultTable;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::FrontierQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic heap-based Dijkstra
///
/// Observable results are identical to [`LinearScan`]: the queue orders by
/// `(distance, vertex)`, so equally close vertices settle in index order,
/// matching the linear scan's first-seen rule.
///
/// [`LinearScan`]: crate::algorithm::LinearScan
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let mut table = ResultTable::new(graph.vertex_count());
        table.set_source(source)?;

        let mut queue = FrontierQueue::new();
        queue.push(source, W::zero());

        while let Some((vertex, distance)) = queue.pop() {
            // Stale entry: a shorter path to this vertex was settled after
            // the push.
            if let Some(current) = table.distance(vertex) {
                if current < distance {
                    continue;
                }
            }

            for (neighbor, weight) in graph.neighbors(vertex) {
                let candidate = distance + weight;
                if table.relax(neighbor, candidate, vertex)? {
                    queue.push(neighbor, candidate);
                }
            }
        }

        Ok(table.into_result(source))
    }
}
