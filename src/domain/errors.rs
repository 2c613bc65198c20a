//! Domain error types
//!
//! This module defines the error hierarchy for Cryptolert. All errors are
//! domain-specific and don't expose third-party SDK types.

use thiserror::Error;

/// Main Cryptolert error type
///
/// This is the primary error type used throughout the crate.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CryptolertError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Document database errors
    #[error("Document database error: {0}")]
    DocumentDb(#[from] DocumentDbError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Document database errors
///
/// Errors that occur when initializing or talking to the managed document
/// store. These errors don't expose the SDK's own error types.
#[derive(Debug, Error)]
pub enum DocumentDbError {
    /// Failed to construct the platform client
    #[error("Failed to connect to document database: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The derived endpoint is not usable
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Database not found
    #[error("Database not found: {0}")]
    DatabaseNotFound(String),

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CryptolertError {
    fn from(err: std::io::Error) -> Self {
        CryptolertError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CryptolertError {
    fn from(err: serde_json::Error) -> Self {
        CryptolertError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CryptolertError {
    fn from(err: toml::de::Error) -> Self {
        CryptolertError::Configuration(format!("TOML parse error: {err}"))
    }
}
