//! Dijkstra single-source shortest paths.

use std::{cmp::Ordering, collections::BinaryHeap};

use bitvec::prelude::*;

use num_traits::Zero;

use crate::{
    graph::{Graph, NodeId},
    shortest_paths::ShortestPaths,
    tracing_support::{debug, info_span},
};

/// Computes shortest paths from `source` to every node of `graph` using
/// Dijkstra's algorithm with a binary-heap frontier, in O((V + E) log V).
///
/// # Precondition
///
/// **Every edge weight must be non-negative.**  This is not checked: on a
/// graph with negative edges the result is unspecified.  Use
/// [`bellman_ford`](crate::bellman_ford()) or
/// [`johnson_all_pairs`](crate::johnson_all_pairs()) for such graphs.
///
/// Nodes with no path from `source` are reported as
/// [`Distance::Unreachable`](crate::Distance::Unreachable).  Which of several
/// equally short paths is recorded is unspecified.
///
/// Panics if `source` is not a node of `graph`.
pub fn dijkstra<G: Graph>(graph: &G, source: NodeId) -> ShortestPaths<G::Weight> {
    graph.assert_valid_node_id(source);
    let num_nodes = graph.num_nodes();
    let _span = info_span!("dijkstra", source = source.index(), nodes = num_nodes).entered();

    let mut paths = ShortestPaths::new(source, num_nodes);
    let mut finalized: BitVec = bitvec![0; num_nodes];
    let mut frontier = BinaryHeap::new();
    frontier.push(MinScored(G::Weight::zero(), source));

    while let Some(MinScored(_, node)) = frontier.pop() {
        if finalized[node.index()] {
            // Stale entry superseded by a shorter one.
            continue;
        }
        finalized.set(node.index(), true);

        for edge in graph.edges_from(node) {
            if finalized[edge.target().index()] {
                continue;
            }
            if let Some(distance) = paths.relax(&edge) {
                frontier.push(MinScored(distance, edge.target()));
            }
        }
    }

    debug!(reached = finalized.count_ones(), "dijkstra finished");
    paths
}

/// A frontier entry ordered so that `BinaryHeap` pops the smallest score
/// first.  Incomparable scores (NaN) order as largest.
struct MinScored<W>(W, NodeId);

impl<W: PartialOrd> PartialEq for MinScored<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for MinScored<W> {}

impl<W: PartialOrd> PartialOrd for MinScored<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for MinScored<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.0, &other.0);
        match a.partial_cmp(b) {
            Some(ordering) => ordering.reverse(),
            #[allow(clippy::eq_op)]
            None => match (a != a, b != b) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                _ => Ordering::Greater,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{digraph::DiGraph, distance::Distance};

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn test_simple() {
        let graph = DiGraph::from_edges(
            5,
            [(0, 1, 10), (0, 2, 3), (2, 1, 4), (1, 3, 2), (2, 3, 8), (3, 4, 7)],
        );
        let paths = dijkstra(&graph, n(0));
        assert_eq!(
            paths.into_distances(),
            [0, 7, 3, 9, 16].map(Distance::Finite).to_vec()
        );
    }

    #[test]
    fn test_unreachable_node() {
        let graph = DiGraph::from_edges(3, [(0, 1, 2)]);
        let paths = dijkstra(&graph, n(0));
        assert_eq!(paths.distance(n(1)), Distance::Finite(2));
        assert_eq!(paths.distance(n(2)), Distance::Unreachable);
    }

    #[test]
    fn test_zero_weight_edges_and_cycles() {
        let graph = DiGraph::from_edges(3, [(0, 1, 0), (1, 0, 0), (1, 2, 0), (2, 2, 0)]);
        let paths = dijkstra(&graph, n(0));
        assert!(paths.distances().iter().all(|&d| d == Distance::Finite(0)));
        assert_eq!(paths.path_to(n(2)).unwrap().num_edges(), 2);
    }

    #[test]
    fn test_parallel_edges_take_the_cheapest() {
        let graph = DiGraph::from_edges(2, [(0, 1, 9), (0, 1, 4), (0, 1, 6)]);
        assert_eq!(dijkstra(&graph, n(0)).distance(n(1)), Distance::Finite(4));
    }

    #[test]
    fn test_single_node() {
        let graph = DiGraph::<i32>::with_nodes(1);
        assert_eq!(dijkstra(&graph, n(0)).into_distances(), vec![Distance::Finite(0)]);
    }

    #[test]
    fn test_float_weights() {
        let graph = DiGraph::from_edges(3, [(0, 1, 0.25), (1, 2, 0.5), (0, 2, 1.0)]);
        assert_eq!(dijkstra(&graph, n(0)).distance(n(2)), Distance::Finite(0.75));
    }

    #[test]
    fn test_min_scored_pops_smallest_first() {
        let mut heap = BinaryHeap::new();
        for (score, index) in [(3.0, 0), (f64::NAN, 1), (1.0, 2), (2.0, 3)] {
            heap.push(MinScored(score, n(index)));
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|entry| entry.1.index())).collect();
        assert_eq!(order, vec![2, 3, 0, 1]);
    }
}
