use std::{
    collections::HashSet,
    fmt::{self, Debug, Display},
};

use derivative::Derivative;

use crate::{
    bellman_ford::bellman_ford,
    dijkstra::dijkstra,
    distance::Distance,
    error::NegativeCycle,
    johnson::{johnson_all_pairs, johnson_pair},
    shortest_paths::{AllPairs, ShortestPaths},
    weight::Weight,
};

/// Identifies a node by its dense index in `[0, num_nodes)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

impl From<NodeId> for usize {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A directed, weighted edge.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "W: Clone"),
    Copy(bound = "W: Copy"),
    Debug(bound = "W: Debug"),
    PartialEq(bound = "W: PartialEq")
)]
pub struct Edge<W> {
    source: NodeId,
    target: NodeId,
    weight: W,
}

impl<W> Edge<W> {
    pub fn new(source: NodeId, target: NodeId, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn weight(&self) -> W
    where
        W: Copy,
    {
        self.weight
    }

    /// Returns true if the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A read-only directed graph with weighted edges.
///
/// Node ids are dense: a graph with `n` nodes has exactly the ids
/// `NodeId::new(0)` through `NodeId::new(n - 1)`.  The algorithms index
/// per-node state by [`NodeId::index`] and rely on this.
///
/// Only [`Self::num_nodes`] and [`Self::edges_from`] are required; the rest
/// have default implementations in terms of those two.
pub trait Graph: Sized {
    type Weight: Weight;

    /// Gets the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Gets an iterator over the outgoing edges of a node.
    fn edges_from(&self, from: NodeId) -> impl Iterator<Item = Edge<Self::Weight>> + '_;

    /// Gets an iterator over all node ids in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.num_nodes()).map(NodeId::new)
    }

    /// Returns true if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.num_nodes() == 0
    }

    /// Gets an iterator over every edge, grouped by source node.
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Weight>> + '_ {
        self.node_ids().flat_map(move |nid| self.edges_from(nid))
    }

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Gets the number of outgoing edges of a node.
    fn num_edges_from(&self, from: NodeId) -> usize {
        self.edges_from(from).count()
    }

    /// Gets an iterator over the distinct successors of a node.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut visited = HashSet::new();
        self.edges_from(node)
            .filter_map(move |edge| visited.insert(edge.target()).then_some(edge.target()))
    }

    /// Returns true if at least one edge has a negative weight.
    fn has_negative_edge(&self) -> bool {
        self.edges().any(|edge| edge.weight().is_negative())
    }

    /// Checks if a NodeId is valid in the graph, returning a reason if it is
    /// not.
    fn check_valid_node_id(&self, id: NodeId) -> Result<(), &'static str> {
        if id.index() < self.num_nodes() {
            Ok(())
        } else {
            Err("NodeId out of range")
        }
    }

    /// Panics if the given NodeId is not valid in the graph.  Does nothing
    /// when the `unchecked` feature is enabled.
    fn assert_valid_node_id(&self, id: NodeId) {
        #[cfg(not(feature = "unchecked"))]
        if let Err(reason) = self.check_valid_node_id(id) {
            panic!("Invalid NodeId: {:?}: {}", id, reason);
        }
        #[cfg(feature = "unchecked")]
        let _ = id;
    }

    // Shortest paths

    /// Single-source shortest paths with the Bellman-Ford algorithm.  See
    /// [`bellman_ford`].
    fn bellman_ford(&self, source: NodeId) -> Result<ShortestPaths<Self::Weight>, NegativeCycle> {
        bellman_ford(self, source)
    }

    /// Single-source shortest paths with Dijkstra's algorithm.  Requires
    /// non-negative weights; see [`dijkstra`].
    fn dijkstra(&self, source: NodeId) -> ShortestPaths<Self::Weight> {
        dijkstra(self, source)
    }

    /// All-pairs shortest paths with Johnson's algorithm.  See
    /// [`johnson_all_pairs`].
    fn johnson_all_pairs(&self) -> Result<AllPairs<Self::Weight>, NegativeCycle> {
        johnson_all_pairs(self)
    }

    /// The shortest distance between two nodes with Johnson's algorithm.  See
    /// [`johnson_pair`].
    fn johnson_pair(
        &self,
        source: NodeId,
        target: NodeId,
    ) -> Result<Distance<Self::Weight>, NegativeCycle> {
        johnson_pair(self, source, target)
    }
}

/// A trait for graphs that can be built up node by node and edge by edge.
pub trait GraphMut: Graph {
    /// Creates a new, empty graph.
    fn new() -> Self;

    /// Adds a node, returning its `NodeId`.  Ids are handed out densely in
    /// insertion order.
    fn add_node(&mut self) -> NodeId;

    /// Adds a directed edge.  Parallel edges and self-loops are kept as
    /// given.  Panics if either end is not a valid node, unless the
    /// `unchecked` feature is enabled.
    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Self::Weight);

    /// Reserves capacity for at least the given number of additional nodes
    /// and edges.  Does nothing by default.
    fn reserve(&mut self, additional_nodes: usize, additional_edges: usize) {
        let _ = additional_nodes;
        let _ = additional_edges;
    }

    /// Copies all nodes and edges from another graph into this graph.
    fn copy_from<S>(&mut self, source: &S) -> Vec<NodeId>
    where
        S: Graph<Weight = Self::Weight>,
    {
        self.copy_from_with(source, |edge| edge.weight())
    }

    /// Copies all nodes and edges from another graph into this graph,
    /// computing each new edge weight from the original edge.
    ///
    /// Returns the node-to-slot mapping: entry `i` is the id in `self` of
    /// node `i` of `source`.
    fn copy_from_with<S, F>(&mut self, source: &S, mut map_edge: F) -> Vec<NodeId>
    where
        S: Graph,
        F: FnMut(&Edge<S::Weight>) -> Self::Weight,
    {
        self.reserve(source.num_nodes(), source.num_edges());
        let node_map: Vec<NodeId> = source.node_ids().map(|_| self.add_node()).collect();
        for edge in source.edges() {
            let weight = map_edge(&edge);
            self.add_edge(
                node_map[edge.source().index()],
                node_map[edge.target().index()],
                weight,
            );
        }
        node_map
    }
}
