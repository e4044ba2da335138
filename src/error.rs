//! Error types for the sampling engine

use thiserror::Error;

/// Result type alias for sampling operations
pub type Result<T> = std::result::Result<T, SamplingError>;

/// Main error type for the sampling engine.
///
/// Sampling itself never fails on odd data: unsuitable columns degrade to a
/// statistical fallback and unparseable values are filtered out. Errors are
/// reserved for caller contract violations.
#[derive(Error, Debug)]
pub enum SamplingError {
    #[error("Invalid strategy: {name} = {value}, {reason}")]
    InvalidStrategy {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SamplingError {
    fn from(err: serde_json::Error) -> Self {
        SamplingError::SerializationError(err.to_string())
    }
}
