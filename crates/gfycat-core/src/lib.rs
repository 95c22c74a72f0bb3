//! Gfycat Core Library
//!
//! This crate provides the response models, the error-envelope decoding contract and
//! the client configuration shared by the blocking and async Gfycat API clients.

pub mod config;
pub mod decode;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{ClientConfig, StoragePolicy};
pub use decode::{contains_error_marker, decode_response, ERROR_MARKER};
pub use error::DecodeError;
pub use models::{ClipItem, EmbedInfo, LookupResponse, ServerError, UrlCheckResult};
