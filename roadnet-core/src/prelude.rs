// Re-export key components
pub use crate::algo::isochrone::{IsochroneRecord, IsochroneTable, calculate_isochrones};
pub use crate::algo::matrix::{MatrixCell, MatrixTable, distance_matrix};
pub use crate::algo::thresholds::Thresholds;
pub use crate::loading::{DispatchConfig, EdgeWeights, NetworkInput, create_graph_store};
pub use crate::model::{CostMode, GraphStore, NetworkView};
pub use crate::profile::Profile;

pub use crate::Error;

// Core types for the street network
pub use crate::Cost;
pub use crate::NodeId;
