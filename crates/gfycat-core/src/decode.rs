//! Two-phase response decoding.
//!
//! Every endpoint answers with JSON. Failures are reported in-band: the body is an
//! envelope with an `error` field instead of the success structure. A body is first
//! scanned for [`ERROR_MARKER`]; when present it is decoded as a [`ServerError`]. If that
//! decode fails the body is treated as a regular response, so a success body that merely
//! mentions `"error":` inside a title or description still decodes normally.

use serde::de::DeserializeOwned;

use crate::error::DecodeError;
use crate::models::ServerError;

/// Literal that marks a response body as a possible error envelope.
pub const ERROR_MARKER: &[u8] = b"\"error\":";

/// Whether `body` contains the error marker anywhere.
pub fn contains_error_marker(body: &[u8]) -> bool {
    body.windows(ERROR_MARKER.len())
        .any(|window| window == ERROR_MARKER)
}

/// Decode a raw response body into `T`, short-circuiting on a server error envelope.
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    if contains_error_marker(body) {
        if let Ok(envelope) = serde_json::from_slice::<ServerError>(body) {
            return Err(DecodeError::Server(envelope.error));
        }
        // Not an envelope after all; fall through to the success shape.
    }

    Ok(serde_json::from_slice(body)?)
}
