//! Unified error types for the model server.
//!
//! The request handlers are total over any input, so errors only arise
//! during startup: loading configuration and binding the listener.

use thiserror::Error;

/// Unified error type for the model server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (listener bind, server run).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;
