use std::{fmt::Debug, ops::Index};

use derivative::Derivative;

use crate::{
    distance::Distance,
    graph::{Edge, NodeId},
    path::Path,
    weight::Weight,
};

/// Shortest distances from one source node to every node of a graph, along
/// with the predecessor of each node on one shortest path.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "W: Clone"),
    Debug(bound = "W: Debug"),
    PartialEq(bound = "W: PartialEq")
)]
pub struct ShortestPaths<W> {
    source: NodeId,
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<NodeId>>,
}

impl<W: Weight> ShortestPaths<W> {
    /// Fresh per-call state: the source at zero, everything else
    /// unreachable.
    pub(crate) fn new(source: NodeId, num_nodes: usize) -> Self {
        let mut distances = vec![Distance::Unreachable; num_nodes];
        distances[source.index()] = Distance::zero();
        Self {
            source,
            distances,
            predecessors: vec![None; num_nodes],
        }
    }

    /// Relaxes one edge.  Returns the target's new distance if the edge
    /// strictly improved it.
    pub(crate) fn relax(&mut self, edge: &Edge<W>) -> Option<W> {
        let candidate = self.distances[edge.source().index()].plus(edge.weight());
        let target = edge.target().index();
        if !candidate.improves_on(self.distances[target]) {
            return None;
        }
        self.distances[target] = candidate;
        self.predecessors[target] = Some(edge.source());
        candidate.finite()
    }

    /// Rewrites every finite distance; unreachable entries are left alone.
    pub(crate) fn map_finite(mut self, mut f: impl FnMut(NodeId, W) -> W) -> Self {
        for (index, distance) in self.distances.iter_mut().enumerate() {
            *distance = distance.map(|w| f(NodeId::new(index), w));
        }
        self
    }

    /// The node the distances are measured from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn num_nodes(&self) -> usize {
        self.distances.len()
    }

    /// The shortest distance from the source to `node`.
    pub fn distance(&self, node: NodeId) -> Distance<W> {
        self.distances[node.index()]
    }

    /// All distances, indexed by node.
    pub fn distances(&self) -> &[Distance<W>] {
        &self.distances
    }

    pub fn into_distances(self) -> Vec<Distance<W>> {
        self.distances
    }

    /// Iterates over `(node, distance)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Distance<W>)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(index, &distance)| (NodeId::new(index), distance))
    }

    /// The node before `node` on a shortest path from the source, or `None`
    /// for the source itself and for unreachable nodes.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors[node.index()]
    }

    /// Reconstructs a shortest path from the source to `target`.  Returns
    /// `None` if `target` is unreachable.
    pub fn path_to(&self, target: NodeId) -> Option<Path> {
        if !self.distance(target).is_reachable() {
            return None;
        }
        let mut nodes = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            nodes.push(current);
            if nodes.len() > self.num_nodes() {
                return None;
            }
        }
        nodes.reverse();
        Path::from_nodes(nodes)
    }
}

impl<W: Weight> Index<NodeId> for ShortestPaths<W> {
    type Output = Distance<W>;

    fn index(&self, node: NodeId) -> &Distance<W> {
        &self.distances[node.index()]
    }
}

/// Shortest distances between every ordered pair of nodes: one
/// [`ShortestPaths`] row per source node.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "W: Clone"),
    Debug(bound = "W: Debug"),
    PartialEq(bound = "W: PartialEq")
)]
pub struct AllPairs<W> {
    rows: Vec<ShortestPaths<W>>,
}

impl<W: Weight> AllPairs<W> {
    pub(crate) fn new(rows: Vec<ShortestPaths<W>>) -> Self {
        debug_assert!(
            rows.iter()
                .enumerate()
                .all(|(index, row)| row.source().index() == index && row.num_nodes() == rows.len())
        );
        Self { rows }
    }

    pub fn num_nodes(&self) -> usize {
        self.rows.len()
    }

    /// The shortest distance from `source` to `target`.
    pub fn distance(&self, source: NodeId, target: NodeId) -> Distance<W> {
        self.rows[source.index()].distance(target)
    }

    /// The single-source row for `source`.
    pub fn row(&self, source: NodeId) -> &ShortestPaths<W> {
        &self.rows[source.index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &ShortestPaths<W>> + '_ {
        self.rows.iter()
    }

    /// Reconstructs a shortest path from `source` to `target`.
    pub fn path(&self, source: NodeId, target: NodeId) -> Option<Path> {
        self.row(source).path_to(target)
    }

    /// The table as a dense `V × V` matrix, `matrix[u][v]` being the distance
    /// from `u` to `v`.
    pub fn into_matrix(self) -> Vec<Vec<Distance<W>>> {
        self.rows
            .into_iter()
            .map(ShortestPaths::into_distances)
            .collect()
    }
}

impl<W: Weight> Index<(NodeId, NodeId)> for AllPairs<W> {
    type Output = Distance<W>;

    fn index(&self, (source, target): (NodeId, NodeId)) -> &Distance<W> {
        &self.rows[source.index()][target]
    }
}
