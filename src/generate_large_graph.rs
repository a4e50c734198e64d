use crate::graph::{GraphMut, NodeId};

/// Generates a large directed graph with an irregular structure.  Edge
/// weights come from `new_edge_weight(i, from, to)`, where `i` counts edges
/// from zero.
///
/// The graph structure includes:
/// - Cluster 1: dense forward-connected cluster (50 nodes, ~60% density)
/// - Cluster 2: medium cluster (80 nodes, ~30% density)
/// - Cluster 3: sparse cluster (150 nodes, ~8% density)
/// - Hub nodes (20 nodes with many outgoing edges)
/// - Scattered nodes (100 nodes with 1-3 outgoing edges)
/// - Bridge nodes into each cluster (10 nodes)
/// - Long-range edges and reciprocal pairs, which close cycles
/// - Self loops
///
/// The result has 410 nodes and a few thousand edges.  It is fully
/// deterministic.
pub fn generate_large_graph<G, F>(graph: &mut G, mut new_edge_weight: F)
where
    G: GraphMut,
    F: FnMut(usize, NodeId, NodeId) -> G::Weight,
{
    let mut edge_counter = 0;
    let mut connect = |graph: &mut G, from: NodeId, to: NodeId| {
        let weight = new_edge_weight(edge_counter, from, to);
        edge_counter += 1;
        graph.add_edge(from, to, weight);
    };

    let mut all_nodes: Vec<NodeId> = Vec::new();

    // Clusters: (size, density predicate).
    let clusters: [(usize, fn(usize, usize) -> bool); 3] = [
        (50, |i, j| (i * 7 + j * 11) % 10 < 6),
        (80, |i, j| (i * 13 + j * 17) % 10 < 3),
        (150, |i, j| (i * 19 + j * 23) % 100 < 8),
    ];
    let mut cluster_starts = Vec::new();
    for (size, dense) in clusters {
        let start = all_nodes.len();
        cluster_starts.push(start);
        all_nodes.extend((0..size).map(|_| graph.add_node()));
        for i in start..all_nodes.len() {
            for j in (i + 1)..all_nodes.len() {
                if dense(i, j) {
                    connect(graph, all_nodes[i], all_nodes[j]);
                }
            }
        }
    }

    // Hubs point at a fixed subset of everything created so far.
    let hubs_start = all_nodes.len();
    for _ in 0..20 {
        let hub = graph.add_node();
        #[allow(clippy::needless_range_loop)]
        for i in 0..all_nodes.len() {
            if (hubs_start * 29 + i * 31) % 7 < 4 {
                connect(graph, hub, all_nodes[i]);
            }
        }
        all_nodes.push(hub);
    }

    // Scattered nodes with one to three outgoing edges each.
    let scattered_start = all_nodes.len();
    for _ in 0..100 {
        let node = graph.add_node();
        let existing = all_nodes.len();
        let num_connections = ((scattered_start + existing) % 3) + 1;
        for c in 0..num_connections {
            let target = (scattered_start * 37 + existing * 41 + c * 43) % existing;
            connect(graph, node, all_nodes[target]);
        }
        all_nodes.push(node);
    }

    // Bridges into each of the three clusters.
    let cluster_ends = [cluster_starts[1], cluster_starts[2], hubs_start];
    for i in 0..10 {
        let bridge = graph.add_node();
        for (c, (&start, &end)) in cluster_starts.iter().zip(&cluster_ends).enumerate() {
            let idx = (i * (47 + 6 * c)) % (end - start) + start;
            connect(graph, bridge, all_nodes[idx]);
        }
        all_nodes.push(bridge);
    }

    // Long-range edges, many of them pointing backwards.
    for i in 0..200 {
        let idx1 = (i * 61) % all_nodes.len();
        let idx2 = (i * 67 + 100) % all_nodes.len();
        if idx1 != idx2 {
            connect(graph, all_nodes[idx1], all_nodes[idx2]);
        }
    }

    // Reciprocal pairs.
    for i in 0..50 {
        let idx1 = (i * 73 + 7) % all_nodes.len();
        let idx2 = (i * 79 + 11) % all_nodes.len();
        if idx1 == idx2 {
            continue;
        }
        connect(graph, all_nodes[idx1], all_nodes[idx2]);
        connect(graph, all_nodes[idx2], all_nodes[idx1]);
    }

    for i in 0..50 {
        let idx = (i * 71) % all_nodes.len();
        connect(graph, all_nodes[idx], all_nodes[idx]);
    }
}
