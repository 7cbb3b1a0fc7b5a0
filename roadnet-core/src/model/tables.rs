//! Columnar snapshots of a network view, the shape binding layers hand
//! over to data frame based hosts.

use serde::Serialize;

use crate::NodeId;
use crate::model::NetworkView;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EdgeTable {
    pub from: Vec<NodeId>,
    pub to: Vec<NodeId>,
    pub cost: Vec<f64>,
    pub speed: Vec<f64>,
    pub length: Vec<f64>,
    pub oneway: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeTable {
    pub id: Vec<NodeId>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DictionaryTable {
    pub name: Vec<String>,
    pub id: Vec<NodeId>,
}

impl EdgeTable {
    pub fn len(&self) -> usize {
        self.from.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }
}

impl From<&NetworkView> for EdgeTable {
    fn from(view: &NetworkView) -> Self {
        let n = view.edge_count();
        let mut table = EdgeTable {
            from: Vec::with_capacity(n),
            to: Vec::with_capacity(n),
            cost: Vec::with_capacity(n),
            speed: Vec::with_capacity(n),
            length: Vec::with_capacity(n),
            oneway: Vec::with_capacity(n),
        };
        for edge in view.edges() {
            table.from.push(edge.from);
            table.to.push(edge.to);
            table.cost.push(edge.cost);
            table.speed.push(edge.speed);
            table.length.push(edge.length);
            table.oneway.push(edge.oneway.to_string());
        }
        table
    }
}

impl From<&NetworkView> for NodeTable {
    fn from(view: &NetworkView) -> Self {
        let nodes = view.nodes();
        NodeTable {
            id: nodes.iter().map(|node| node.id).collect(),
            x: nodes.iter().map(|node| node.x).collect(),
            y: nodes.iter().map(|node| node.y).collect(),
        }
    }
}

impl From<&NetworkView> for DictionaryTable {
    fn from(view: &NetworkView) -> Self {
        let (name, id) = view
            .dictionary()
            .iter()
            .map(|(name, id)| (name.to_string(), id))
            .unzip();
        DictionaryTable { name, id }
    }
}
