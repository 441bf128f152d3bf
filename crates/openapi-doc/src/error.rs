//! Error types for document parsing

use thiserror::Error;

/// Result type alias for parser operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parser error types
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}
