use thiserror::Error;

use crate::graph::NodeId;

/// Returned when a cycle of negative total weight makes shortest paths
/// ill-defined.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("negative-weight cycle detected: {}", format_cycle(.cycle))]
pub struct NegativeCycle {
    cycle: Vec<NodeId>,
}

impl NegativeCycle {
    pub(crate) fn new(cycle: Vec<NodeId>) -> Self {
        Self { cycle }
    }

    /// The nodes of one negative cycle in traversal order: there is an edge
    /// from each node to the next, and from the last back to the first.
    pub fn cycle(&self) -> &[NodeId] {
        &self.cycle
    }
}

fn format_cycle(cycle: &[NodeId]) -> String {
    let mut parts: Vec<String> = cycle.iter().map(ToString::to_string).collect();
    if let Some(first) = cycle.first() {
        parts.push(first.to_string());
    }
    parts.join(" -> ")
}
