use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use super::Adjacency;
use super::state::State;
use crate::{Cost, NodeId};

/// Bounded Dijkstra expansion from a single origin.
///
/// Returns every node reached at a cost of at most `max_cost`, in the order
/// nodes were first discovered. A node is reported once, with the cost of
/// the relaxation that discovered it; later cheaper relaxations still
/// drive the search but are not reported again. The origin itself is not
/// part of the result.
pub(crate) fn bounded_dijkstra(
    adjacency: &Adjacency,
    origin: NodeId,
    max_cost: Cost,
) -> Vec<(NodeId, Cost)> {
    let node_count = adjacency.node_count();
    let mut costs = vec![Cost::INFINITY; node_count];
    let mut discovered = FixedBitSet::with_capacity(node_count);
    let mut reached = Vec::new();
    let mut heap = BinaryHeap::new();

    costs[origin] = 0.0;
    heap.push(State::new(0.0, origin));

    while let Some(State { cost, node, .. }) = heap.pop() {
        // Skip if we've found a better path
        if cost > costs[node] {
            continue;
        }

        if cost > max_cost {
            continue;
        }

        for link in adjacency.links(node) {
            let next_cost = cost + link.cost;
            if next_cost < costs[link.to] {
                costs[link.to] = next_cost;

                if !discovered.put(link.to) && link.to != origin && next_cost <= max_cost {
                    reached.push((link.to, next_cost));
                }

                heap.push(State::new(next_cost, link.to));
            }
        }
    }

    reached
}
