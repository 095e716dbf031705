//! Error handling module for the estimator
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The pricing engine, selection store and step navigator are total and never
//! produce these; they come from files, settings and the terminal.

use thiserror::Error;

/// Main error type for the estimator
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Selections file values outside the accepted ranges
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Receipt rendering or writing errors
    #[error("Receipt error: {0}")]
    Receipt(String),
}

/// Result type alias for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;

impl EstimatorError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a receipt error
    pub fn receipt(msg: impl Into<String>) -> Self {
        Self::Receipt(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EstimatorError::config("threshold must be positive");
        assert_eq!(err.to_string(), "Configuration error: threshold must be positive");

        let err = EstimatorError::validation("languages above 10");
        assert_eq!(err.to_string(), "Validation error: languages above 10");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EstimatorError = io_err.into();
        assert!(matches!(err, EstimatorError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(EstimatorError::terminal("raw mode"), EstimatorError::Terminal(_)));
        assert!(matches!(EstimatorError::receipt("no dir"), EstimatorError::Receipt(_)));
    }
}
