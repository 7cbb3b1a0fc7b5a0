//! This module is responsible for turning columnar input arrays into a
//! validated graph store.

mod builder;
mod config;

pub use builder::create_graph_store;
pub use config::{DispatchConfig, EdgeWeights, NetworkInput};
