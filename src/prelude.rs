pub use crate::digraph::DiGraph;
pub use crate::distance::Distance;
pub use crate::error::NegativeCycle;
pub use crate::graph::{Edge, Graph, GraphMut, NodeId};
pub use crate::path::Path;
pub use crate::shortest_paths::{AllPairs, ShortestPaths};
pub use crate::weight::Weight;
