use std::fmt::Debug;

use derivative::Derivative;

use crate::{
    graph::{Edge, Graph, GraphMut, NodeId},
    weight::Weight,
};

/// An adjacency-list directed graph sized exactly to its node count.
///
/// Each node owns the list of its outgoing `(target, weight)` pairs, so
/// [`Graph::edges_from`] is a slice walk.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "W: Clone"),
    Debug(bound = "W: Debug"),
    Default(bound = ""),
    PartialEq(bound = "W: PartialEq")
)]
pub struct DiGraph<W> {
    adjacency: Vec<Vec<(NodeId, W)>>,
    num_edges: usize,
}

impl<W: Weight> DiGraph<W> {
    /// Creates an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(nodes),
            num_edges: 0,
        }
    }

    /// Creates a graph with `num_nodes` nodes and no edges.
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            adjacency: (0..num_nodes).map(|_| Vec::new()).collect(),
            num_edges: 0,
        }
    }

    /// Builds a graph from a node count and `(source, target, weight)`
    /// triples with 0-based node indices.  Panics if an index is out of
    /// range.
    pub fn from_edges<I>(num_nodes: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_nodes(num_nodes);
        for (from, to, weight) in edges {
            graph.add_edge(NodeId::new(from), NodeId::new(to), weight);
        }
        graph
    }
}

impl<W: Weight> Graph for DiGraph<W> {
    type Weight = W;

    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn edges_from(&self, from: NodeId) -> impl Iterator<Item = Edge<W>> + '_ {
        self.assert_valid_node_id(from);
        self.adjacency[from.index()]
            .iter()
            .map(move |&(to, weight)| Edge::new(from, to, weight))
    }

    fn num_edges_from(&self, from: NodeId) -> usize {
        self.assert_valid_node_id(from);
        self.adjacency[from.index()].len()
    }
}

impl<W: Weight> GraphMut for DiGraph<W> {
    fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self) -> NodeId {
        let id = NodeId::new(self.adjacency.len());
        self.adjacency.push(Vec::new());
        id
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) {
        self.assert_valid_node_id(from);
        self.assert_valid_node_id(to);
        self.adjacency[from.index()].push((to, weight));
        self.num_edges += 1;
    }

    fn reserve(&mut self, additional_nodes: usize, _additional_edges: usize) {
        self.adjacency.reserve(additional_nodes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let graph = DiGraph::<i32>::new();
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_from_edges() {
        let graph = DiGraph::from_edges(3, [(0, 1, 4), (0, 2, 5), (1, 2, -3)]);
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.num_edges_from(NodeId::new(0)), 2);
        assert_eq!(graph.num_edges_from(NodeId::new(2)), 0);
        assert!(graph.has_negative_edge());
    }

    #[test]
    fn test_edges_from() {
        let graph = DiGraph::from_edges(2, [(0, 1, 7), (1, 0, 2)]);
        let edges: Vec<_> = graph.edges_from(NodeId::new(0)).collect();
        assert_eq!(edges, vec![Edge::new(NodeId::new(0), NodeId::new(1), 7)]);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let graph = DiGraph::from_edges(2, [(0, 1, 7), (0, 1, 2)]);
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.successors(NodeId::new(0)).count(), 1);
    }

    #[test]
    fn test_add_node_hands_out_dense_ids() {
        let mut graph = DiGraph::<i64>::new();
        let a = graph.add_node();
        let b = graph.add_node();
        assert_eq!((a.index(), b.index()), (0, 1));
        graph.add_edge(a, b, 1);
        assert_eq!(graph.edges().count(), 1);
    }

    #[test]
    fn test_copy_from_with() {
        let graph = DiGraph::from_edges(3, [(0, 1, 1), (1, 2, 2)]);
        let mut doubled = DiGraph::new();
        let node_map = doubled.copy_from_with(&graph, |edge| edge.weight() * 2);
        assert_eq!(node_map, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
        assert_eq!(doubled, DiGraph::from_edges(3, [(0, 1, 2), (1, 2, 4)]));
    }

    #[test]
    #[cfg(not(feature = "unchecked"))]
    #[should_panic(expected = "Invalid NodeId")]
    fn test_add_edge_rejects_invalid_node() {
        DiGraph::from_edges(2, [(0, 2, 1)]);
    }
}
