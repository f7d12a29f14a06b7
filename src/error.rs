//! Error types for the practice engine

use thiserror::Error;

/// Result type alias using the engine's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the practice engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Recognition failed: {0}")]
    Recognition(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
