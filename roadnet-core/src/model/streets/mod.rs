//! Street network components

pub mod components;
pub mod dictionary;

pub use components::{CostMode, Edge, Node, Oneway, travel_minutes};
pub use dictionary::NodeDictionary;
