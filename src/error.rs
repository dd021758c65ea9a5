//! Error types for the mapping library.

use thiserror::Error;

/// Main error type for mapper operations.
#[derive(Error, Debug)]
pub enum MapperError {
    /// Metadata misuse: missing table mapping, unknown filter field,
    /// missing key/value role. Programmer error, surfaced immediately.
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Row-to-field or field-to-column conversion failure.
    #[error("Coercion error: {0}")]
    Coercion(String),

    /// Driver or connection fault reported by the execution collaborator.
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration error (missing section, invalid values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (config file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl MapperError {
    /// Create a Mapping error.
    pub fn mapping(message: impl Into<String>) -> Self {
        MapperError::Mapping(message.into())
    }

    /// Create a Coercion error.
    pub fn coercion(message: impl Into<String>) -> Self {
        MapperError::Coercion(message.into())
    }

    /// Create an Execution error.
    pub fn execution(message: impl Into<String>) -> Self {
        MapperError::Execution(message.into())
    }
}

/// Result type alias for mapper operations.
pub type Result<T> = std::result::Result<T, MapperError>;
