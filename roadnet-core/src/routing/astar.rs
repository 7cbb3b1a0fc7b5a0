use std::collections::BinaryHeap;

use geo::{Distance, Euclidean};
use log::warn;

use super::Adjacency;
use super::state::State;
use crate::model::{CostMode, Node};
use crate::{Cost, NodeId};

/// A* search between two nodes, guided by the straight-line distance from
/// each node to the target.
///
/// Returns `None` if the target cannot be reached. The search stops once the
/// target is taken off the queue.
pub(crate) fn astar_cost(
    adjacency: &Adjacency,
    nodes: &[Node],
    origin: NodeId,
    target: NodeId,
    mode: CostMode,
) -> Option<Cost> {
    if origin == target {
        return Some(0.0);
    }

    let node_count = adjacency.node_count();
    let goal = nodes[target].geometry();
    let heuristic = |node: NodeId| Euclidean.distance(nodes[node].geometry(), goal);

    let mut costs = vec![Cost::INFINITY; node_count];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
    let mut heap = BinaryHeap::new();

    costs[origin] = 0.0;
    heap.push(State {
        priority: heuristic(origin),
        cost: 0.0,
        node: origin,
    });

    while let Some(State { cost, node, .. }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if cost > costs[node] {
            continue;
        }

        for link in adjacency.links(node) {
            let next_cost = cost + link.weight(mode);
            if next_cost < costs[link.to] {
                costs[link.to] = next_cost;
                predecessors[link.to] = Some(node);
                heap.push(State {
                    priority: next_cost + heuristic(link.to),
                    cost: next_cost,
                    node: link.to,
                });
            }
        }
    }

    predecessors[target]?;
    let total = path_cost(&costs, &predecessors, origin, target)?;
    if (total - costs[target]).abs() > 1e-9 * costs[target].max(1.0) {
        warn!(
            "Path {origin} -> {target}: reconstructed cost {total} differs from settled cost {}",
            costs[target]
        );
    }
    Some(total)
}

/// Sums cost increments along the predecessor chain from `target` back to
/// `origin`
fn path_cost(
    costs: &[Cost],
    predecessors: &[Option<NodeId>],
    origin: NodeId,
    target: NodeId,
) -> Option<Cost> {
    let mut total = 0.0;
    let mut node = target;
    // A chain longer than the node count would mean a cycle
    for _ in 0..costs.len() {
        if node == origin {
            return Some(total);
        }
        let previous = predecessors[node]?;
        total += costs[node] - costs[previous];
        node = previous;
    }
    warn!("Predecessor chain from {target} does not lead back to {origin}");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, NetworkView, NodeDictionary, Oneway};

    fn network(edges: &[(NodeId, NodeId, Cost, f64)], coords: &[(f64, f64)]) -> NetworkView {
        let edges = edges
            .iter()
            .map(|&(from, to, cost, length)| Edge {
                from,
                to,
                cost,
                speed: 0.0,
                length,
                oneway: Oneway::Forward,
            })
            .collect();
        let nodes = coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Node { id, x, y })
            .collect();
        let names = (0..coords.len()).map(|id| id.to_string()).collect();
        NetworkView::from_parts(edges, nodes, NodeDictionary::new(names).unwrap())
    }

    #[test]
    fn test_finds_cheapest_path() {
        let view = network(
            &[(0, 1, 1.0, 10.0), (1, 2, 1.0, 10.0), (0, 3, 5.0, 1.0), (3, 2, 0.5, 1.0)],
            &[(0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (0.5, 0.5)],
        );
        let adjacency = Adjacency::new(&view);
        assert_eq!(astar_cost(&adjacency, view.nodes(), 0, 2, CostMode::Time), Some(2.0));
        assert_eq!(astar_cost(&adjacency, view.nodes(), 0, 2, CostMode::Distance), Some(2.0));
    }

    #[test]
    fn test_same_node_costs_nothing() {
        let view = network(&[(0, 1, 1.0, 1.0)], &[(0.0, 0.0), (1.0, 0.0)]);
        let adjacency = Adjacency::new(&view);
        assert_eq!(astar_cost(&adjacency, view.nodes(), 1, 1, CostMode::Time), Some(0.0));
    }

    #[test]
    fn test_unreachable_target() {
        let view = network(&[(0, 1, 1.0, 1.0)], &[(0.0, 0.0), (1.0, 0.0)]);
        let adjacency = Adjacency::new(&view);
        assert_eq!(astar_cost(&adjacency, view.nodes(), 1, 0, CostMode::Time), None);
    }

    #[test]
    fn test_path_cost_sums_increments() {
        let costs = [0.0, 1.5, 4.0];
        let predecessors = [None, Some(0), Some(1)];
        assert_eq!(path_cost(&costs, &predecessors, 0, 2), Some(4.0));
        assert_eq!(path_cost(&costs, &[None, None, Some(1)], 0, 2), None);
    }
}
