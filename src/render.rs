//! Tab-separated reporting of a finished run

use num_traits::{Float, Zero};
use std::fmt::{Debug, Display};

use crate::algorithm::ShortestPathResult;
use crate::graph::named::NamedGraph;
use crate::Result;

/// Renders one line per vertex in registration order:
/// `<name>\t<distance>\t<predecessorNameOrEmpty>`
///
/// A vertex that was never reached renders with the distance `inf` and an
/// empty predecessor column.
pub fn render_table<W>(graph: &NamedGraph<W>, result: &ShortestPathResult<W>) -> Result<String>
where
    W: Float + Zero + Debug + Copy + Display,
{
    let mut out = String::new();
    for (vertex, name) in graph.names().iter().enumerate() {
        let distance = result.distances.get(vertex).copied().flatten();
        let previous = result.predecessors.get(vertex).copied().flatten();
        let previous_name = match previous {
            Some(previous) => graph.name_of(previous)?,
            None => "",
        };
        match distance {
            Some(distance) => {
                out.push_str(&format!("{}\t{}\t{}\n", name, distance, previous_name))
            }
            None => out.push_str(&format!("{}\tinf\t{}\n", name, previous_name)),
        }
    }
    Ok(out)
}
