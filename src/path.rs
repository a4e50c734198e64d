use num_traits::Zero;

use crate::{
    graph::{Graph, NodeId},
};

/// A path in a graph, represented as the sequence of nodes it visits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// Creates a new path starting at the given node.
    pub fn new(start: NodeId) -> Self {
        Self { nodes: vec![start] }
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeId>) -> Option<Self> {
        let nodes: Vec<_> = nodes.into_iter().collect();
        (!nodes.is_empty()).then_some(Self { nodes })
    }

    /// Returns the first node in the path.
    pub fn first_node(&self) -> NodeId {
        self.nodes[0]
    }

    /// Returns the last node in the path.
    pub fn last_node(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns an iterator over the nodes in the path.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns an iterator over consecutive `(from, to)` node pairs.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Extends the path to `node`.
    pub fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    /// Total weight of the path in `graph`, taking the cheapest edge for each
    /// hop.  Returns `None` if some hop has no edge.
    pub fn weight<G: Graph>(&self, graph: &G) -> Option<G::Weight> {
        self.hops().try_fold(G::Weight::zero(), |total, (from, to)| {
            let cheapest = graph
                .edges_from(from)
                .filter(|edge| edge.target() == to)
                .map(|edge| edge.weight())
                .reduce(|a, b| if b < a { b } else { a })?;
            Some(total + cheapest)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digraph::DiGraph;

    fn path(nodes: &[usize]) -> Path {
        Path::from_nodes(nodes.iter().copied().map(NodeId::new)).unwrap()
    }

    #[test]
    fn test_trivial_path() {
        let p = Path::new(NodeId::new(3));
        assert_eq!(p.first_node(), p.last_node());
        assert_eq!(p.num_edges(), 0);
        assert_eq!(p.hops().count(), 0);
    }

    #[test]
    fn test_weight_uses_cheapest_parallel_edge() {
        let graph = DiGraph::from_edges(3, [(0, 1, 5), (0, 1, 2), (1, 2, -1)]);
        assert_eq!(path(&[0, 1, 2]).weight(&graph), Some(1));
        assert_eq!(path(&[0]).weight(&graph), Some(0));
    }

    #[test]
    fn test_weight_of_missing_hop() {
        let graph = DiGraph::from_edges(3, [(0, 1, 5)]);
        assert_eq!(path(&[0, 2]).weight(&graph), None);
    }

    #[test]
    fn test_from_nodes_rejects_empty() {
        assert!(Path::from_nodes([]).is_none());
    }
}
