use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Inconsistent topology: {0}")]
    InconsistentTopology(String),
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
    #[error("Invalid node id {0}")]
    InvalidNodeId(usize),
    #[error("Invalid cost mode: {0}")]
    InvalidMode(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
