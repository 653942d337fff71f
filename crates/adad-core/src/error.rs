//! Error types for the numerology engine.

use thiserror::Error;

/// Result type for numerology operations.
pub type NumerologyResult<T> = Result<T, NumerologyError>;

/// Errors that can occur while computing a chart or loading tables.
///
/// Most irregular input degrades to a best-effort number instead of an
/// error; only input that leaves nothing to compute ends up here.
#[derive(Debug, Error)]
pub enum NumerologyError {
    /// The input cannot be scored at all (e.g. a name without Latin letters).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A replacement lookup table is malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for NumerologyError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
