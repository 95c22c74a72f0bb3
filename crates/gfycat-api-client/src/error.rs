//! Client error types.

use std::path::PathBuf;

use gfycat_core::DecodeError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A required argument was empty. Raised before any I/O.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("Failed to read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error envelope reported by the API. Displays the server's message verbatim.
    #[error("{0}")]
    Server(String),

    /// Object storage rejected the upload. Displays the storage response verbatim.
    #[error("{0}")]
    StorageUpload(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ClientError {
    /// Whether the failure was reported by the remote side rather than by the client.
    pub fn is_remote(&self) -> bool {
        matches!(self, ClientError::Server(_) | ClientError::StorageUpload(_))
    }
}

impl From<DecodeError> for ClientError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Server(message) => ClientError::Server(message),
            DecodeError::Json(source) => ClientError::Decode(source),
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
