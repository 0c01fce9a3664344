//! Error types for the Sibyl library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SibylError`] enum. Classification itself never fails from the
//! caller's point of view: remote errors are recovered inside the
//! engine and demoted to the lexical fast path. The variants here are
//! surfaced by the corpus curation API and the remote clients.

use std::io;

use thiserror::Error;

/// The main error type for Sibyl operations.
#[derive(Error, Debug)]
pub enum SibylError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Training corpus errors (unknown intent, unknown variant, etc.)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Text analysis errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Remote service errors (readiness checks, embedding classification)
    #[error("Remote error: {0}")]
    Remote(String),

    /// Serialization error (malformed wire payloads)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SibylError.
pub type Result<T> = std::result::Result<T, SibylError>;

impl SibylError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SibylError::Corpus(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SibylError::Analysis(msg.into())
    }

    /// Create a new remote error.
    pub fn remote<S: Into<String>>(msg: S) -> Self {
        SibylError::Remote(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        SibylError::Serialization(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        SibylError::InvalidOperation(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SibylError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        SibylError::Other(format!("Not found: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SibylError::Other(msg.into())
    }
}
