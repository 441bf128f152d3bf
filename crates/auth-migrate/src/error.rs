//! Error types for the migration pipeline
//!
//! Each failure kind is tagged so callers can branch on it, and each
//! maps to a distinct process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for migration operations
pub type MigrateResult<T> = std::result::Result<T, MigrateError>;

/// Migration error types
#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("Input file does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to parse spec: {0}")]
    Parse(#[from] openapi_doc::ParseError),

    #[error("Security scheme key already in use: {key}")]
    SchemeCollision { key: String },

    #[error("Failed to serialize spec: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] serde_json::Error),
}

impl MigrateError {
    /// Process exit code for this failure kind
    pub fn exit_code(&self) -> i32 {
        match self {
            MigrateError::FileNotFound(_) => 2,
            MigrateError::Parse(_) => 3,
            MigrateError::SchemeCollision { .. } => 4,
            MigrateError::Serialize(_) => 5,
            MigrateError::Io(_) => 6,
            MigrateError::Config(_) => 7,
        }
    }
}
