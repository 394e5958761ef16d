//! Error types for rolegate

use thiserror::Error;

/// Result type alias for rolegate
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for rolegate
#[derive(Error, Debug)]
pub enum AuthzError {
    /// Malformed evaluation input: unknown action or role name, or a
    /// resource missing an attribute the matched rule needs
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
