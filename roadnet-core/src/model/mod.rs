//! Data model of the street network
//!
//! The graph store keeps an immutable original view of the network and the
//! view derived from it by the active routing profile.

pub mod graph_store;
pub mod network;
pub mod streets;
pub mod tables;

pub use graph_store::GraphStore;
pub use network::NetworkView;
pub use streets::{CostMode, Edge, Node, NodeDictionary, Oneway, travel_minutes};
pub use tables::{DictionaryTable, EdgeTable, NodeTable};
