use std::cmp::Ordering;

use crate::{Cost, NodeId};

/// Priority queue entry. `priority` orders the queue, `cost` is the
/// accumulated cost of reaching `node`.
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) priority: f64,
    pub(super) cost: Cost,
    pub(super) node: NodeId,
}

impl State {
    pub(super) fn new(cost: Cost, node: NodeId) -> Self {
        Self {
            priority: cost,
            cost,
            node,
        }
    }
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by priority, lower node id first on ties
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
