//! Core error types.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by descriptor construction and conversion.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No valid construction input was supplied.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A kind outside the supported vocabulary, or malformed input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A conversion target cannot represent the descriptor.
    #[error("conversion error: {0}")]
    Conversion(String),
}

impl CoreError {
    /// Creates a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a conversion error.
    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::Conversion(msg.into())
    }
}
