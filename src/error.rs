//! Error types and result definitions

use thiserror::Error;

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the benchmark harness
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration, e.g. a triple count too small to fill the pools
    #[error("Configuration error: {0}")]
    Config(String),

    /// No test case is registered under the requested id
    #[error("Unknown test: {0}")]
    UnknownTest(u32),

    /// A test case with the same id was already registered
    #[error("Test already registered: {0}")]
    DuplicateTest(u32),

    /// A measure phase needs a representation that no setup has built
    #[error("Representation not built: {0}")]
    MissingRepresentation(&'static str),

    /// A representation rejected its input
    #[error("Representation error: {0}")]
    Representation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<oxigraph::model::IriParseError> for Error {
    fn from(err: oxigraph::model::IriParseError) -> Self {
        Error::Representation(err.to_string())
    }
}
