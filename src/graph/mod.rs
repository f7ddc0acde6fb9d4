pub mod adjacency;
pub mod named;
pub mod traits;

pub use adjacency::AdjacencyGraph;
pub use named::NamedGraph;
pub use traits::{Graph, MutableGraph};
