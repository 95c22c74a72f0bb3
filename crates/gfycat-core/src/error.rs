//! Error types module
//!
//! Decoding a response body can fail in exactly two ways: the body is an error envelope
//! reported by the server, or it does not match the expected success structure.

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body carried an `"error":` envelope. Holds the server's message verbatim.
    #[error("{0}")]
    Server(String),

    #[error("Failed to decode response: {0}")]
    Json(#[source] serde_json::Error),
}

impl DecodeError {
    /// Message reported by the server, if this is a server-reported error.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            DecodeError::Server(message) => Some(message),
            DecodeError::Json(_) => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err)
    }
}
