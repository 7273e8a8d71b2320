//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Chat API base URL must be an http(s) URL")]
    InvalidBaseUrl,

    #[error("System preamble cannot be empty")]
    EmptyPreamble,

    #[error("Knowledge catalog path cannot be empty")]
    EmptyKnowledgePath,

    #[error("Listen timeout must be greater than zero")]
    InvalidListenTimeout,

    #[error("Language table cannot be empty")]
    EmptyLanguageTable,
}
