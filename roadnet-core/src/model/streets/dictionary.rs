//! Bidirectional mapping between external node names and node ids

use hashbrown::HashMap;

use crate::{Error, NodeId};

/// Name <-> id dictionary of a network view.
///
/// Ids are dense: the name of node `i` is stored at position `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeDictionary {
    ids: HashMap<String, NodeId>,
    names: Vec<String>,
}

impl NodeDictionary {
    /// Builds a dictionary assigning each name its position as id.
    ///
    /// # Errors
    ///
    /// Returns an error if a name occurs more than once
    pub fn new(names: Vec<String>) -> Result<Self, Error> {
        let mut ids = HashMap::with_capacity(names.len());
        for (id, name) in names.iter().enumerate() {
            if ids.insert(name.clone(), id).is_some() {
                return Err(Error::InvalidData(format!("Duplicate node name '{name}'")));
            }
        }
        Ok(Self { ids, names })
    }

    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(name, id)` pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.as_str(), id))
    }

    /// Dictionary of the nodes kept by `remap`, where `remap[old]` is the new
    /// id of `old` or `None` if it was dropped. New ids must be dense and
    /// ascending in old id order.
    pub(crate) fn remapped(&self, remap: &[Option<NodeId>]) -> Self {
        let names: Vec<String> = self
            .names
            .iter()
            .zip(remap)
            .filter_map(|(name, new_id)| new_id.map(|_| name.clone()))
            .collect();
        let ids = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        Self { ids, names }
    }
}
