use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Columnar description of a street network.
///
/// Edges reference nodes by name; node ids are assigned from the
/// position of each name in `node_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInput {
    pub edge_from: Vec<String>,
    pub edge_to: Vec<String>,
    pub weights: EdgeWeights,
    pub node_name: Vec<String>,
    pub node_x: Vec<f64>,
    pub node_y: Vec<f64>,
    #[serde(default)]
    pub crs: String,
}

/// Edge attributes, which also selects how edge costs are obtained
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EdgeWeights {
    /// Precomputed costs, with optional distances (empty = all zero)
    Cost {
        cost: Vec<f64>,
        #[serde(default)]
        distance: Vec<f64>,
    },
    /// Speeds in km/h and lengths in meters; cost is travel time in minutes.
    /// An empty `oneway` column tags every edge `""`.
    Speed {
        speed: Vec<f64>,
        length: Vec<f64>,
        #[serde(default)]
        oneway: Vec<String>,
    },
}

/// Parallel dispatch settings for searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Number of worker threads origins are spread over
    pub workers: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}
