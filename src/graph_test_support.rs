//! Arbitrary graphs for property tests, plus a Floyd-Warshall reference
//! implementation to check results against.

use quickcheck::{Arbitrary, Gen};

use crate::{
    digraph::DiGraph,
    graph::{Graph, GraphMut, NodeId},
    tracing_support::{info_span, init_tracing},
    weight::Weight,
};

const MAX_NODES: usize = 12;
const MAX_EDGES: usize = 30;

/// A small graph with integer weights in `[-10, 40]`.  May contain negative
/// cycles.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: DiGraph<i64>,
}

/// A small graph with integer weights in `[0, 50]`.
#[derive(Debug, Clone)]
pub struct ArbNonNegativeGraph {
    pub graph: DiGraph<i64>,
}

/// A small graph with negative edges but no negative cycle.
///
/// Each edge weight is `base + p[v] - p[u]` for a non-negative `base` and a
/// hidden per-node offset `p`, so the weight of any cycle equals the sum of
/// its non-negative bases.
#[derive(Debug, Clone)]
pub struct ArbPotentialGraph {
    pub graph: DiGraph<i64>,
}

/// Like [`ArbPotentialGraph`] but with `i8` weights that reach far into the
/// type's range.  Offsets lie in `[0, 30]` and bases in `[0, 3]`, so every
/// distance, potential, and reweighted distance, and every sum the algorithms
/// form from them, still fits in an `i8`.
#[derive(Debug, Clone)]
pub struct ArbNarrowPotentialGraph {
    pub graph: DiGraph<i8>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let graph = arbitrary_graph(g, |g, _, _| weight_in(g, -10, 40));
        ArbGraph { graph }
    }
}

impl Arbitrary for ArbNonNegativeGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let graph = arbitrary_graph(g, |g, _, _| weight_in(g, 0, 50));
        ArbNonNegativeGraph { graph }
    }
}

impl Arbitrary for ArbPotentialGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let offsets: Vec<i64> = (0..MAX_NODES).map(|_| weight_in(g, 0, 20)).collect();
        let graph = arbitrary_graph(g, |g, from, to| {
            weight_in(g, 0, 30) + offsets[to] - offsets[from]
        });
        ArbPotentialGraph { graph }
    }
}

impl Arbitrary for ArbNarrowPotentialGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let offsets: Vec<i64> = (0..MAX_NODES).map(|_| weight_in(g, 0, 30)).collect();
        let graph = arbitrary_graph(g, |g, from, to| {
            (weight_in(g, 0, 3) + offsets[to] - offsets[from]) as i8
        });
        ArbNarrowPotentialGraph { graph }
    }
}

fn weight_in(g: &mut Gen, low: i64, high: i64) -> i64 {
    let span = (high - low + 1) as u64;
    low + (u64::arbitrary(g) % span) as i64
}

fn arbitrary_graph<W, F>(g: &mut Gen, mut weight: F) -> DiGraph<W>
where
    W: Weight,
    F: FnMut(&mut Gen, usize, usize) -> W,
{
    let num_nodes = 1 + usize::arbitrary(g) % MAX_NODES;
    let num_edges = usize::arbitrary(g) % MAX_EDGES;
    let num_extra_parallel_edges = usize::arbitrary(g) % 3;
    let num_extra_self_loops = usize::arbitrary(g) % 3;

    let mut graph = DiGraph::with_nodes(num_nodes);
    for i in 0..num_edges {
        let source = usize::arbitrary(g) % num_nodes;
        let target = usize::arbitrary(g) % num_nodes;
        let w = weight(g, source, target);
        graph.add_edge(NodeId::new(source), NodeId::new(target), w);
        if i < num_extra_parallel_edges {
            let w = weight(g, source, target);
            graph.add_edge(NodeId::new(source), NodeId::new(target), w);
        }
        if i < num_extra_self_loops {
            let w = weight(g, source, source);
            graph.add_edge(NodeId::new(source), NodeId::new(source), w);
        }
    }
    graph
}

/// All-pairs distances by Floyd-Warshall.  `None` means unreachable.  On a
/// graph with negative cycles the entries are not shortest distances, but
/// `table[v][v] < 0` holds exactly for the nodes on some negative cycle.
pub fn floyd_warshall<G: Graph<Weight = i64>>(graph: &G) -> Vec<Vec<Option<i64>>> {
    init_tracing();
    let _span = info_span!("floyd_warshall").entered();

    let n = graph.num_nodes();
    let mut table = vec![vec![None; n]; n];
    for (i, row) in table.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for edge in graph.edges() {
        let slot = &mut table[edge.source().index()][edge.target().index()];
        if slot.is_none_or(|w| edge.weight() < w) {
            *slot = Some(edge.weight());
        }
    }
    for k in 0..n {
        for i in 0..n {
            let Some(ik) = table[i][k] else { continue };
            for j in 0..n {
                let Some(kj) = table[k][j] else { continue };
                let through = ik + kj;
                if table[i][j].is_none_or(|w| through < w) {
                    table[i][j] = Some(through);
                }
            }
        }
    }
    table
}

/// Returns true if a negative cycle can be reached from `source`.
pub fn negative_cycle_reachable(table: &[Vec<Option<i64>>], source: NodeId) -> bool {
    table[source.index()]
        .iter()
        .enumerate()
        .any(|(v, dist)| dist.is_some() && table[v][v].is_some_and(|w| w < 0))
}

/// Returns true if the graph contains a negative cycle anywhere.
pub fn has_negative_cycle(table: &[Vec<Option<i64>>]) -> bool {
    table
        .iter()
        .enumerate()
        .any(|(v, row)| row[v].is_some_and(|w| w < 0))
}
