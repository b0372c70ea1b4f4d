//! Error types for world construction and persistence

use thiserror::Error;

/// Validation failures raised when building or replacing world state.
///
/// Stepping a world never produces one of these; they only surface at
/// construction, grid replacement or when parsing tags and rule entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("invalid rule set: {0}")]
    InvalidRuleSet(String),
}

/// Failures while exporting, importing, saving or loading a world.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported export version: {0}")]
    UnsupportedVersion(u8),

    #[error(transparent)]
    World(#[from] WorldError),
}

/// Failures while reading a simulation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}
