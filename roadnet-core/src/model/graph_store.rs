//! Graph store: the immutable original network plus the view derived from
//! it by the active routing profile.

use std::fmt;
use std::sync::Arc;

use log::info;
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::model::{DictionaryTable, Edge, EdgeTable, NetworkView, Node, NodeDictionary, NodeTable};
use crate::profile::Profile;
use crate::{Error, NodeId};

/// Node position indexed for nearest neighbour lookups
pub(crate) type IndexedNode = GeomWithData<[f64; 2], NodeId>;

/// Street network with a switchable routing profile.
///
/// Searches borrow the store immutably while profile activation needs a
/// mutable borrow, so a profile can never change under a running search.
#[derive(Clone)]
pub struct GraphStore {
    crs: String,
    original: Arc<NetworkView>,
    active: Arc<NetworkView>,
    profile: Profile,
    spatial: RTree<IndexedNode>,
}

impl GraphStore {
    pub(crate) fn new(original: NetworkView, crs: String) -> Self {
        let original = Arc::new(original);
        let spatial = build_rtree(&original);
        Self {
            crs,
            active: Arc::clone(&original),
            original,
            profile: Profile::Default,
            spatial,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        self.active.edges()
    }

    pub fn nodes(&self) -> &[Node] {
        self.active.nodes()
    }

    pub fn node_dict(&self) -> &NodeDictionary {
        self.active.dictionary()
    }

    pub fn crs(&self) -> &str {
        &self.crs
    }

    pub fn active_profile(&self) -> Profile {
        self.profile
    }

    /// Active view of the network
    pub fn view(&self) -> &NetworkView {
        &self.active
    }

    /// Shared handle to the active view, stays valid across later activations
    pub fn snapshot(&self) -> Arc<NetworkView> {
        Arc::clone(&self.active)
    }

    /// The network as it was constructed, before any profile was applied
    pub fn original(&self) -> &NetworkView {
        &self.original
    }

    /// Replaces the active view with the one `profile` derives from the
    /// original network.
    pub fn activate(&mut self, profile: Profile) {
        let derived = match profile {
            Profile::Default => Arc::clone(&self.original),
            _ => Arc::new(profile.derive(&self.original)),
        };

        info!(
            "Activated {profile} profile: {} of {} nodes, {} edges",
            derived.node_count(),
            self.original.node_count(),
            derived.edge_count()
        );

        self.spatial = build_rtree(&derived);
        self.active = derived;
        self.profile = profile;
    }

    /// Activates a profile by its numeric code (`0` default, `1` foot,
    /// `2` bicycle, `3` car).
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` for an unknown code, leaving the active
    /// view untouched
    pub fn activate_code(&mut self, code: i64) -> Result<Profile, Error> {
        let profile = Profile::try_from(code)?;
        self.activate(profile);
        Ok(profile)
    }

    /// Id of the named node in the active view
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.active.dictionary().id(name)
    }

    /// Name of an active node id
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.active.dictionary().name(id)
    }

    /// Ids of the named nodes in the active view.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` for the first name that is not part of the view
    pub fn resolve_names<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<NodeId>, Error> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.node_id(name).ok_or_else(|| {
                    Error::InvalidData(format!(
                        "Node '{name}' is not part of the {} network",
                        self.profile
                    ))
                })
            })
            .collect()
    }

    /// Active node closest to the given coordinate
    pub fn nearest_node(&self, x: f64, y: f64) -> Option<NodeId> {
        self.spatial.nearest_neighbor(&[x, y]).map(|node| node.data)
    }

    pub fn edge_table(&self) -> EdgeTable {
        EdgeTable::from(self.view())
    }

    pub fn node_table(&self) -> NodeTable {
        NodeTable::from(self.view())
    }

    pub fn dictionary_table(&self) -> DictionaryTable {
        DictionaryTable::from(self.view())
    }
}

impl fmt::Debug for GraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStore")
            .field("crs", &self.crs)
            .field("profile", &self.profile)
            .field("nodes", &self.active.node_count())
            .field("edges", &self.active.edge_count())
            .finish_non_exhaustive()
    }
}

fn build_rtree(view: &NetworkView) -> RTree<IndexedNode> {
    let points = view
        .nodes()
        .iter()
        .map(|node| GeomWithData::new([node.x, node.y], node.id))
        .collect();
    RTree::bulk_load(points)
}
