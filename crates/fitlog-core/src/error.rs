//! Error types for fitlog-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fitlog-core
#[derive(Debug, Error)]
pub enum Error {
    /// A metric name that does not match any measurement column
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}
