//! Error types for pad setup.
//!
//! Painting itself never fails; these only cover configuration and color
//! parsing at the edges.

use thiserror::Error;

/// Pad errors.
#[derive(Debug, Error)]
pub enum PadError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for pad operations.
pub type PadResult<T> = Result<T, PadError>;

impl From<serde_json::Error> for PadError {
    fn from(err: serde_json::Error) -> Self {
        PadError::InvalidConfig(err.to_string())
    }
}
