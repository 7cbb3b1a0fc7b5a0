use crate::model::{CostMode, NetworkView};
use crate::{Cost, NodeId};

/// Outgoing link of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Link {
    pub(crate) to: NodeId,
    pub(crate) cost: Cost,
    pub(crate) length: f64,
}

impl Link {
    pub(crate) fn weight(&self, mode: CostMode) -> f64 {
        match mode {
            CostMode::Time => self.cost,
            CostMode::Distance => self.length,
        }
    }
}

/// Compressed adjacency list of a network view.
///
/// Links of a node keep the order of their edges in the edge table.
#[derive(Debug, Clone)]
pub(crate) struct Adjacency {
    offsets: Vec<usize>,
    links: Vec<Link>,
}

impl Adjacency {
    pub(crate) fn new(view: &NetworkView) -> Self {
        let node_count = view.node_count();
        let mut offsets = vec![0usize; node_count + 1];
        for edge in view.edges() {
            offsets[edge.from + 1] += 1;
        }
        for i in 0..node_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let placeholder = Link {
            to: 0,
            cost: 0.0,
            length: 0.0,
        };
        let mut links = vec![placeholder; view.edge_count()];
        for edge in view.edges() {
            let slot = &mut cursor[edge.from];
            links[*slot] = Link {
                to: edge.to,
                cost: edge.cost,
                length: edge.length,
            };
            *slot += 1;
        }

        Self { offsets, links }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub(crate) fn links(&self, node: NodeId) -> &[Link] {
        &self.links[self.offsets[node]..self.offsets[node + 1]]
    }
}
