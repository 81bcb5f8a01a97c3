//! Storage error types.

use thiserror::Error;
use trove_core::CoreError;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage errors.
///
/// Connector failures pass through the manager untranslated.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A descriptor construction or conversion error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An I/O error from a file-backed connector.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A backend-specific failure.
    #[error("backend error: {0}")]
    Backend(String),

    /// The connector has already been closed.
    #[error("{0} connector is closed")]
    Closed(&'static str),

    /// A value does not match the feature's declared descriptor.
    #[error("value for feature {feature} does not match its descriptor: expected {expected}, got {actual}")]
    Incompatible {
        /// Feature name.
        feature: String,
        /// The declared descriptor.
        expected: String,
        /// The descriptor inferred from the value.
        actual: String,
    },
}

impl StoreError {
    /// Creates a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates a backend error.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self::backend(err.to_string())
    }
}
