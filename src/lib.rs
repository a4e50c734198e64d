//! Shortest paths over weighted directed graphs: Bellman-Ford, Dijkstra, and
//! Johnson's all-pairs algorithm.
//!
//! ```
//! use allpairs::prelude::*;
//!
//! let graph = DiGraph::from_edges(3, [(0, 1, -2), (1, 2, 3), (0, 2, 5)]);
//! let table = graph.johnson_all_pairs().unwrap();
//! assert_eq!(table.distance(NodeId::new(0), NodeId::new(2)), Distance::Finite(1));
//! assert_eq!(table.distance(NodeId::new(2), NodeId::new(0)), Distance::Unreachable);
//! ```

pub mod bellman_ford;
pub mod digraph;
pub mod dijkstra;
pub mod distance;
pub mod error;
pub mod generate_large_graph;
pub mod graph;
pub mod graph_test_support;
pub mod johnson;
pub mod path;
pub mod prelude;
pub mod shortest_paths;
pub mod tracing_support;
pub mod weight;

pub use bellman_ford::bellman_ford;
pub use digraph::DiGraph;
pub use dijkstra::dijkstra;
pub use distance::Distance;
pub use error::NegativeCycle;
pub use graph::{Edge, Graph, GraphMut, NodeId};
pub use johnson::{johnson_all_pairs, johnson_pair};
pub use path::Path;
pub use shortest_paths::{AllPairs, ShortestPaths};
pub use weight::Weight;
