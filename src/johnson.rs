//! Johnson's all-pairs shortest paths.
//!
//! The graph is augmented with a virtual source joined to every node by a
//! zero-weight edge.  One Bellman-Ford run from that source yields a
//! potential `h` with `h(v) <= h(u) + w(u, v)` for every edge, so the
//! reweighted edges `w(u, v) + h(u) - h(v)` are all non-negative.  Dijkstra
//! then runs from every node of the reweighted graph, and `h(v) - h(u)` is
//! added back to each finite distance.
//!
//! Reweighting preserves which paths are shortest: every path from `u` to
//! `v` shifts by the same `h(u) - h(v)`.  Predecessors found on the
//! reweighted graph are therefore valid for the original one.

use num_traits::Zero;

use crate::{
    bellman_ford::bellman_ford,
    digraph::DiGraph,
    dijkstra::dijkstra,
    distance::Distance,
    error::NegativeCycle,
    graph::{Graph, GraphMut, NodeId},
    shortest_paths::{AllPairs, ShortestPaths},
    tracing_support::{debug, info_span},
    weight::Weight,
};

/// Computes shortest distances between every ordered pair of nodes with
/// Johnson's algorithm.  Edge weights may be negative.
///
/// Runs in O(V·E + V·(V + E) log V).  The input graph is not modified.
///
/// Returns [`NegativeCycle`] if the graph contains a cycle of negative total
/// weight anywhere; no partial table is returned in that case.
pub fn johnson_all_pairs<G: Graph>(graph: &G) -> Result<AllPairs<G::Weight>, NegativeCycle> {
    let _span = info_span!(
        "johnson_all_pairs",
        nodes = graph.num_nodes(),
        edges = graph.num_edges()
    )
    .entered();

    let potential = potentials(graph)?;
    let reweighted = reweight(graph, &potential);

    let rows: Vec<_> = {
        let _span = info_span!("dijkstra_rows").entered();
        reweighted
            .node_ids()
            .map(|source| dijkstra(&reweighted, source))
            .collect()
    };

    let rows = {
        let _span = info_span!("recover").entered();
        rows.into_iter()
            .map(|row| recover(row, &potential))
            .collect()
    };

    Ok(AllPairs::new(rows))
}

/// Computes the shortest distance from `source` to `target` with Johnson's
/// algorithm, running Dijkstra from `source` only.
///
/// Fails with [`NegativeCycle`] under exactly the same conditions as
/// [`johnson_all_pairs`], even if the cycle is unreachable from `source`.
///
/// Panics if `source` or `target` is not a node of `graph`.
pub fn johnson_pair<G: Graph>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Result<Distance<G::Weight>, NegativeCycle> {
    graph.assert_valid_node_id(source);
    graph.assert_valid_node_id(target);
    let _span = info_span!(
        "johnson_pair",
        source = source.index(),
        target = target.index()
    )
    .entered();

    let potential = potentials(graph)?;
    let reweighted = reweight(graph, &potential);
    let row = recover(dijkstra(&reweighted, source), &potential);
    Ok(row.distance(target))
}

/// Computes the node potential: the shortest distance to each node from a
/// virtual source that has a zero-weight edge to every node.  Every entry is
/// therefore at most zero.
///
/// Returns [`NegativeCycle`] if `graph` has a negative cycle anywhere.  The
/// reported cycle never includes the virtual source.
pub fn potentials<G: Graph>(graph: &G) -> Result<Vec<G::Weight>, NegativeCycle> {
    let (augmented, virtual_source) = {
        let _span = info_span!("augment").entered();
        augment(graph)
    };

    let _span = info_span!("potentials").entered();
    let paths = bellman_ford(&augmented, virtual_source)?;
    let potential: Vec<_> = graph
        .node_ids()
        .map(|node| match paths.distance(node) {
            Distance::Finite(h) => h,
            Distance::Unreachable => {
                unreachable!("virtual source has an edge to {:?}", node)
            }
        })
        .collect();
    debug!(nodes = potential.len(), "potentials computed");
    Ok(potential)
}

/// Builds a copy of `graph` plus a virtual source with a zero-weight edge to
/// every node.  Original nodes keep their ids; the virtual source gets the
/// next one.
fn augment<G: Graph>(graph: &G) -> (DiGraph<G::Weight>, NodeId) {
    let mut augmented = DiGraph::with_capacity(graph.num_nodes() + 1);
    let node_map = augmented.copy_from(graph);
    debug_assert!(node_map.iter().enumerate().all(|(i, nid)| nid.index() == i));

    let virtual_source = augmented.add_node();
    for node in node_map {
        augmented.add_edge(virtual_source, node, G::Weight::zero());
    }
    (augmented, virtual_source)
}

/// Builds a new graph with every edge `(u, v, w)` of `graph` replaced by
/// `(u, v, w + potential[u] - potential[v])`.  `graph` is left untouched.
///
/// With `potential` from [`potentials`] every new weight is non-negative.
/// Panics if one is not, unless the `unchecked` feature is enabled.
pub fn reweight<G: Graph>(graph: &G, potential: &[G::Weight]) -> DiGraph<G::Weight> {
    assert_eq!(
        potential.len(),
        graph.num_nodes(),
        "potential must have one entry per node"
    );
    let _span = info_span!("reweight", edges = graph.num_edges()).entered();

    let mut reweighted = DiGraph::with_capacity(graph.num_nodes());
    reweighted.copy_from_with(graph, |edge| {
        let from = potential[edge.source().index()];
        let to = potential[edge.target().index()];
        let weight = edge.weight().shift(from, to);
        #[cfg(not(feature = "unchecked"))]
        assert!(
            !weight.is_negative(),
            "reweighted edge {:?} -> {:?} is negative: {:?} + {:?} - {:?} = {:?}",
            edge.source(),
            edge.target(),
            edge.weight(),
            from,
            to,
            weight
        );
        weight
    });
    reweighted
}

/// Undoes the reweighting on one Dijkstra row.  Unreachable entries stay
/// unreachable.
fn recover<W: Weight>(row: ShortestPaths<W>, potential: &[W]) -> ShortestPaths<W> {
    let from = potential[row.source().index()];
    row.map_finite(|node, distance| distance.unshift(from, potential[node.index()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn test_augment_adds_virtual_source() {
        let graph = DiGraph::from_edges(3, [(0, 1, -2)]);
        let (augmented, virtual_source) = augment(&graph);
        assert_eq!(virtual_source, n(3));
        assert_eq!(augmented.num_nodes(), 4);
        assert_eq!(augmented.num_edges(), 4);
        assert!(
            augmented
                .edges_from(virtual_source)
                .all(|edge| edge.weight() == 0)
        );
        assert_eq!(augmented.successors(virtual_source).count(), 3);
    }

    #[test]
    fn test_potentials() {
        let graph = DiGraph::from_edges(3, [(0, 1, -2), (1, 2, 3), (0, 2, 5)]);
        assert_eq!(potentials(&graph).unwrap(), vec![0, -2, 0]);
    }

    #[test]
    fn test_potentials_without_edges() {
        let graph = DiGraph::<i64>::with_nodes(4);
        assert_eq!(potentials(&graph).unwrap(), vec![0; 4]);
    }

    #[test]
    fn test_reweight_is_non_negative() {
        let graph = DiGraph::from_edges(4, [(0, 1, -2), (1, 2, 3), (0, 2, 5), (2, 3, -7)]);
        let potential = potentials(&graph).unwrap();
        let reweighted = reweight(&graph, &potential);
        assert_eq!(reweighted.num_edges(), graph.num_edges());
        assert!(reweighted.edges().all(|edge| edge.weight() >= 0));
    }

    #[test]
    #[cfg(not(feature = "unchecked"))]
    #[should_panic(expected = "is negative")]
    fn test_reweight_rejects_bad_potential() {
        let graph = DiGraph::from_edges(2, [(0, 1, -2)]);
        reweight(&graph, &[0, 0]);
    }

    #[test]
    fn test_recover_skips_unreachable() {
        let mut row = ShortestPaths::new(n(0), 3);
        row.relax(&crate::graph::Edge::new(n(0), n(1), 5));
        let row = recover(row, &[-1, -4, -2]);
        assert_eq!(
            row.into_distances(),
            vec![Distance::Finite(0), Distance::Finite(2), Distance::Unreachable]
        );
    }

    #[test]
    fn test_negative_cycle_is_reported_without_virtual_source() {
        let graph = DiGraph::from_edges(4, [(0, 1, 1), (2, 3, -1), (3, 2, -1)]);
        let err = johnson_all_pairs(&graph).unwrap_err();
        assert!(err.cycle().iter().all(|node| node.index() < 4));
        assert!(err.cycle().contains(&n(2)) && err.cycle().contains(&n(3)));
    }

    #[test]
    fn test_pair_fails_on_unrelated_negative_cycle() {
        let graph = DiGraph::from_edges(4, [(0, 1, 1), (2, 3, -1), (3, 2, -1)]);
        assert!(johnson_pair(&graph, n(0), n(1)).is_err());
    }

    #[test]
    fn test_recover_near_type_limits() {
        let graph = DiGraph::<i8>::from_edges(3, [(2, 0, -100), (2, 1, -100), (0, 1, 50)]);
        assert_eq!(potentials(&graph).unwrap(), vec![-100, -100, 0]);

        let table = johnson_all_pairs(&graph).unwrap();
        for source in graph.node_ids() {
            let expected = bellman_ford(&graph, source).unwrap();
            assert_eq!(table.row(source).distances(), expected.distances());
        }
        assert_eq!(table.distance(n(0), n(1)), Distance::Finite(50));
        assert_eq!(table.distance(n(2), n(1)), Distance::Finite(-100));
        assert_eq!(table.distance(n(0), n(2)), Distance::Unreachable);
    }

    #[test]
    fn test_empty_graph() {
        let graph = DiGraph::<i32>::new();
        let all_pairs = johnson_all_pairs(&graph).unwrap();
        assert_eq!(all_pairs.num_nodes(), 0);
    }
}
