use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::ShortestPathResult;
use crate::{Error, Result};

/// One tentative result per vertex
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Tentative shortest distance from the source; `None` until reached
    pub shortest_distance: Option<W>,

    /// The vertex preceding this one on the current best path
    pub previous_vertex: Option<usize>,
}

/// Per-run table of tentative distances and predecessors
///
/// After initialization, [`ResultTable::relax`] is the only mutation path;
/// it moves distance and predecessor together, so the table is never
/// half-updated. Distances only ever decrease. The sentinel "infinity" is
/// `None`, which keeps additions away from it entirely: candidates are
/// always computed from an already-finite distance.
#[derive(Debug, Clone)]
pub struct ResultTable<W>
where
    W: Float + Zero + Debug + Copy,
{
    entries: Vec<ResultEntry<W>>,
}

impl<W> ResultTable<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a table with one unreached entry per vertex
    pub fn new(vertex_count: usize) -> Self {
        ResultTable {
            entries: vec![
                ResultEntry {
                    shortest_distance: None,
                    previous_vertex: None,
                };
                vertex_count
            ],
        }
    }

    /// Returns the number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry for a vertex
    pub fn get(&self, vertex: usize) -> Result<&ResultEntry<W>> {
        self.entries.get(vertex).ok_or(Error::InvalidVertex(vertex))
    }

    /// Tentative distance of a vertex; `None` for the sentinel or a
    /// foreign index
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.entries.get(vertex).and_then(|e| e.shortest_distance)
    }

    /// Seeds the source vertex with distance zero
    pub fn set_source(&mut self, vertex: usize) -> Result<()> {
        let entry = self
            .entries
            .get_mut(vertex)
            .ok_or(Error::InvalidVertex(vertex))?;
        entry.shortest_distance = Some(W::zero());
        entry.previous_vertex = None;
        Ok(())
    }

    /// Updates a vertex iff `candidate` improves on its current distance
    ///
    /// Returns whether an update occurred.
    pub fn relax(&mut self, vertex: usize, candidate: W, predecessor: usize) -> Result<bool> {
        let entry = self
            .entries
            .get_mut(vertex)
            .ok_or(Error::InvalidVertex(vertex))?;
        let improved = match entry.shortest_distance {
            None => true,
            Some(current) => candidate < current,
        };
        if improved {
            entry.shortest_distance = Some(candidate);
            entry.previous_vertex = Some(predecessor);
        }
        Ok(improved)
    }

    /// Freezes the table into an immutable result snapshot
    pub fn into_result(self, source: usize) -> ShortestPathResult<W> {
        let (distances, predecessors): (Vec<_>, Vec<_>) = self
            .entries
            .into_iter()
            .map(|e| (e.shortest_distance, e.previous_vertex))
            .unzip();
        ShortestPathResult {
            distances,
            predecessors,
            source,
        }
    }
}
