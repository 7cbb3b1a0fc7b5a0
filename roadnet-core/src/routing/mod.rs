//! Single-origin graph searches and the dispatcher that fans them out
//! over worker threads.

pub(crate) mod adjacency;
pub(crate) mod astar;
pub(crate) mod dijkstra;
pub(crate) mod dispatch;
mod state;

pub(crate) use adjacency::Adjacency;
