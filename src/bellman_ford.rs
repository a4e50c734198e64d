//! Bellman-Ford single-source shortest paths.

use crate::{
    error::NegativeCycle,
    graph::{Graph, NodeId},
    shortest_paths::ShortestPaths,
    tracing_support::{debug, info_span, trace},
    weight::Weight,
};

/// Computes shortest paths from `source` to every node of `graph` using the
/// Bellman-Ford algorithm.
///
/// Edge weights may be negative.  Nodes with no path from `source` are
/// reported as [`Distance::Unreachable`](crate::Distance::Unreachable).
/// Runs in O(V·E), returning early once a full pass changes nothing.
///
/// Returns [`NegativeCycle`] if a cycle of negative total weight is reachable
/// from `source`; no distances are returned in that case.
///
/// Panics if `source` is not a node of `graph`.
pub fn bellman_ford<G: Graph>(
    graph: &G,
    source: NodeId,
) -> Result<ShortestPaths<G::Weight>, NegativeCycle> {
    graph.assert_valid_node_id(source);
    let num_nodes = graph.num_nodes();
    let _span = info_span!("bellman_ford", source = source.index(), nodes = num_nodes).entered();

    let mut paths = ShortestPaths::new(source, num_nodes);

    // A shortest simple path has at most V - 1 edges.
    let mut converged = false;
    for pass in 1..num_nodes {
        if relax_pass(graph, &mut paths).is_none() {
            debug!(pass, "bellman_ford converged early");
            converged = true;
            break;
        }
    }

    if !converged && let Some(witness) = relax_pass(graph, &mut paths) {
        let cycle = trace_cycle(&paths, witness);
        debug!(witness = witness.index(), cycle_len = cycle.len(), "negative cycle detected");
        return Err(NegativeCycle::new(cycle));
    }

    Ok(paths)
}

/// Relaxes every edge once.  Returns the last node whose distance improved,
/// or `None` if nothing changed.
fn relax_pass<G: Graph>(graph: &G, paths: &mut ShortestPaths<G::Weight>) -> Option<NodeId> {
    let mut last_improved = None;
    for edge in graph.edges() {
        if paths.relax(&edge).is_some() {
            trace!(from = edge.source().index(), to = edge.target().index(), "relaxed");
            last_improved = Some(edge.target());
        }
    }
    last_improved
}

/// Recovers one negative cycle from the predecessor links, given a node that
/// was still improving after V - 1 passes.  Stepping back V times from such a
/// node is guaranteed to land on a cycle.
///
/// Panics if the predecessor chain from `witness` ends before that.
fn trace_cycle<W: Weight>(paths: &ShortestPaths<W>, witness: NodeId) -> Vec<NodeId> {
    let mut start = witness;
    for _ in 0..paths.num_nodes() {
        match paths.predecessor(start) {
            Some(pred) => start = pred,
            None => panic!(
                "predecessor chain from {:?} ends at {:?} without closing a cycle",
                witness, start
            ),
        }
    }

    let mut cycle = vec![start];
    let mut current = start;
    while let Some(pred) = paths.predecessor(current) {
        if pred == start || cycle.len() > paths.num_nodes() {
            break;
        }
        cycle.push(pred);
        current = pred;
    }
    // Collected walking backwards along the edges.
    cycle.reverse();
    cycle
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{digraph::DiGraph, distance::Distance, path::Path};

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    fn finite(distances: &[i64]) -> Vec<Distance<i64>> {
        distances.iter().copied().map(Distance::Finite).collect()
    }

    #[test]
    fn test_negative_edge_without_cycle() {
        let graph = DiGraph::from_edges(3, [(0, 1, 4), (0, 2, 5), (1, 2, -3)]);
        let paths = bellman_ford(&graph, n(0)).unwrap();
        assert_eq!(paths.into_distances(), finite(&[0, 4, 1]));
    }

    #[test]
    fn test_negative_cycle() {
        let graph = DiGraph::from_edges(3, [(0, 1, 1), (1, 2, -1), (2, 0, -1)]);
        let err = bellman_ford(&graph, n(0)).unwrap_err();
        assert_eq!(
            err.cycle().iter().copied().collect::<HashSet<_>>(),
            HashSet::from([n(0), n(1), n(2)])
        );
    }

    #[test]
    fn test_reported_cycle_is_negative() {
        let graph = DiGraph::from_edges(
            5,
            [(0, 1, 2), (1, 2, 3), (2, 3, -4), (3, 2, 1), (3, 4, 1)],
        );
        let err = bellman_ford(&graph, n(0)).unwrap_err();
        let mut closed = Path::from_nodes(err.cycle().iter().copied()).unwrap();
        closed.push(err.cycle()[0]);
        assert!(closed.weight(&graph).unwrap() < 0);
    }

    #[test]
    fn test_unreachable_negative_cycle_is_ignored() {
        let graph = DiGraph::from_edges(4, [(0, 1, 3), (2, 3, -1), (3, 2, -1)]);
        let paths = bellman_ford(&graph, n(0)).unwrap();
        assert_eq!(paths.distance(n(1)), Distance::Finite(3));
        assert_eq!(paths.distance(n(2)), Distance::Unreachable);
        assert_eq!(paths.distance(n(3)), Distance::Unreachable);
    }

    #[test]
    fn test_negative_self_loop() {
        let graph = DiGraph::from_edges(1, [(0, 0, -1)]);
        let err = bellman_ford(&graph, n(0)).unwrap_err();
        assert_eq!(err.cycle(), &[n(0)]);
    }

    #[test]
    fn test_unreachable_node() {
        let graph = DiGraph::from_edges(3, [(0, 1, 2)]);
        let paths = bellman_ford(&graph, n(0)).unwrap();
        assert_eq!(paths.distance(n(2)), Distance::Unreachable);
        assert_eq!(paths.path_to(n(2)), None);
    }

    #[test]
    fn test_no_overflow_through_unreachable() {
        let graph = DiGraph::from_edges(3, [(0, 1, i64::MAX), (2, 1, i64::MAX)]);
        let paths = bellman_ford(&graph, n(0)).unwrap();
        assert_eq!(paths.distance(n(1)), Distance::Finite(i64::MAX));
    }

    #[test]
    fn test_path_reconstruction() {
        let graph = DiGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (0, 2, 5), (2, 3, -2)]);
        let paths = bellman_ford(&graph, n(0)).unwrap();
        let path = paths.path_to(n(3)).unwrap();
        assert_eq!(path.nodes().collect::<Vec<_>>(), vec![n(0), n(1), n(2), n(3)]);
        assert_eq!(Distance::from(path.weight(&graph)), paths.distance(n(3)));
    }

    #[test]
    fn test_float_weights() {
        let graph = DiGraph::from_edges(3, [(0, 1, 1.5), (1, 2, -0.5), (0, 2, 2.0)]);
        let paths = bellman_ford(&graph, n(0)).unwrap();
        assert_eq!(paths.distance(n(2)), Distance::Finite(1.0));
    }

    #[test]
    #[should_panic(expected = "without closing a cycle")]
    fn test_trace_cycle_rejects_open_chain() {
        let mut paths = ShortestPaths::new(n(0), 3);
        paths.relax(&crate::graph::Edge::new(n(0), n(1), 5));
        trace_cycle(&paths, n(1));
    }

    #[test]
    #[cfg(not(feature = "unchecked"))]
    #[should_panic(expected = "Invalid NodeId")]
    fn test_invalid_source() {
        let graph = DiGraph::<i32>::with_nodes(2);
        let _ = bellman_ford(&graph, n(2));
    }
}
