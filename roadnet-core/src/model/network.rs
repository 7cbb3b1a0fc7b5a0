//! One consistent view of the street network: edge table, node table and
//! the name dictionary that goes with them.

use crate::model::{Edge, Node, NodeDictionary};
use crate::{Error, NodeId};

/// Edge table, node table and dictionary of a street network.
///
/// Node ids are dense (`0..nodes.len()`) and every edge references
/// nodes of the same view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkView {
    edges: Vec<Edge>,
    nodes: Vec<Node>,
    dictionary: NodeDictionary,
}

impl NetworkView {
    pub(crate) fn from_parts(edges: Vec<Edge>, nodes: Vec<Node>, dictionary: NodeDictionary) -> Self {
        debug_assert_eq!(nodes.len(), dictionary.len());
        debug_assert!(nodes.iter().enumerate().all(|(i, node)| node.id == i));
        debug_assert!(
            edges
                .iter()
                .all(|edge| edge.from < nodes.len() && edge.to < nodes.len())
        );
        Self {
            edges,
            nodes,
            dictionary,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn dictionary(&self) -> &NodeDictionary {
        &self.dictionary
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Checks that every id refers to a node of this view
    pub(crate) fn validate_nodes(&self, ids: &[NodeId]) -> Result<(), Error> {
        match ids.iter().find(|&&id| id >= self.nodes.len()) {
            Some(&id) => Err(Error::InvalidNodeId(id)),
            None => Ok(()),
        }
    }
}
