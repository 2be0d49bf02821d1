use thiserror::Error;

/// Top-level error type for the Sim engine.
///
/// Rejected moves and undos are not errors; they come back as
/// `MoveResult::Rejected` / `UndoResult::Rejected`.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("inconsistent snapshot: {0}")]
    Snapshot(String),

    #[error("snapshot decode failed: {0}")]
    Decode(#[from] bincode::Error),
}

/// Errors related to board configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("vertex count {value} is out of range [{min}, {max}]")]
    VertexCountOutOfRange { value: usize, min: usize, max: usize },

    #[error("maximum vertex count {value} exceeds the supported limit {limit}")]
    MaxVerticesTooLarge { value: usize, limit: usize },
}
