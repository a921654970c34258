//! Error types for Flashgrid

use thiserror::Error;

/// Main error type for Flashgrid operations
#[derive(Error, Debug)]
pub enum GridError {
    /// Row selector value outside of the 4/5/6 configurations
    #[error("Unknown column preset: {0}")]
    UnknownColumnPreset(String),

    /// Unrecognized flip policy name
    #[error("Unknown flip policy: {0}")]
    UnknownFlipPolicy(String),

    /// Configuration file could not be decoded
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GridError
pub type GridResult<T> = Result<T, GridError>;
