//! Centralized error types for architect.

use thiserror::Error;

/// Main error type for architect operations.
#[derive(Error, Debug)]
pub enum ArchitectError {
    #[error("Template '{0}' not found")]
    UnknownTemplate(String),

    #[error("Invalid customization: {0}")]
    InvalidCustomization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for architect operations.
pub type ArchitectResult<T> = Result<T, ArchitectError>;

impl ArchitectError {
    /// Create an unknown template error.
    pub fn unknown_template(id: impl Into<String>) -> Self {
        Self::UnknownTemplate(id.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid customization error.
    pub fn invalid_customization(msg: impl Into<String>) -> Self {
        Self::InvalidCustomization(msg.into())
    }
}
