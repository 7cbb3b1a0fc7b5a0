//! Road network analysis engine: routing profiles, isochrones and
//! distance matrices over a weighted street graph.

pub mod algo;
mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod profile;
pub(crate) mod routing;

pub use error::Error;

/// Dense index of a node in the active node table
pub type NodeId = usize;
/// Edge traversal cost, minutes for speed based graphs
pub type Cost = f64;

// Re-export of the main types
pub use algo::isochrone::{
    IsochroneRecord, IsochroneTable, ThresholdColumn, calculate_isochrones, isochrones_to_geojson,
    isochrones_to_geojson_string,
};
pub use algo::matrix::{MatrixCell, MatrixTable, distance_matrix};
pub use algo::thresholds::{Thresholds, assign_threshold};
pub use loading::{DispatchConfig, EdgeWeights, NetworkInput, create_graph_store};
pub use model::{
    CostMode, DictionaryTable, Edge, EdgeTable, GraphStore, NetworkView, Node, NodeDictionary,
    NodeTable, Oneway,
};
pub use profile::Profile;
