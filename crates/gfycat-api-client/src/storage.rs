//! Direct upload to object storage through the pre-signed POST policy.
//!
//! The form carries the fixed policy fields, then `key` (the caller-chosen clip name)
//! and finally `file`. Object storage answers a successful POST with an empty body and
//! the policy's success status; any body at all is an error document.

use std::path::Path;

use gfycat_core::StoragePolicy;
use reqwest::StatusCode;

use crate::error::{ClientError, Result};

const FALLBACK_FILE_NAME: &str = "upload.gif";

/// Reject empty arguments before touching the filesystem or the network.
pub(crate) fn validate_upload_args(file_path: &Path, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ClientError::InvalidInput(
            "a clip name is required for file uploads".to_string(),
        ));
    }
    if file_path.as_os_str().is_empty() {
        return Err(ClientError::InvalidInput(
            "a file path is required for file uploads".to_string(),
        ));
    }
    Ok(())
}

/// Base name of the uploaded file, sent as the `file` part's filename.
pub(crate) fn upload_file_name(file_path: &Path) -> String {
    file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(FALLBACK_FILE_NAME)
        .to_string()
}

/// Text fields of the storage form, in order, ending with the object key.
pub(crate) fn form_text_fields(policy: &StoragePolicy, name: &str) -> Vec<(&'static str, String)> {
    let mut fields = policy.form_fields().to_vec();
    fields.push(("key", name.to_string()));
    fields
}

pub(crate) fn build_form(
    policy: &StoragePolicy,
    name: &str,
    file_name: String,
    data: Vec<u8>,
) -> reqwest::multipart::Form {
    let form = form_text_fields(policy, name)
        .into_iter()
        .fold(reqwest::multipart::Form::new(), |form, (field, value)| {
            form.text(field, value)
        });

    form.part(
        "file",
        reqwest::multipart::Part::bytes(data).file_name(file_name),
    )
}

#[cfg(feature = "blocking")]
pub(crate) fn build_blocking_form(
    policy: &StoragePolicy,
    name: &str,
    file_name: String,
    data: Vec<u8>,
) -> reqwest::blocking::multipart::Form {
    let form = form_text_fields(policy, name).into_iter().fold(
        reqwest::blocking::multipart::Form::new(),
        |form, (field, value)| form.text(field, value),
    );

    form.part(
        "file",
        reqwest::blocking::multipart::Part::bytes(data).file_name(file_name),
    )
}

/// Interpret the storage POST response.
///
/// A non-empty body is always an error and becomes the message verbatim. An empty body
/// with a non-success status is an error too.
pub(crate) fn storage_outcome(status: StatusCode, body: &[u8]) -> Result<()> {
    if !body.is_empty() {
        return Err(ClientError::StorageUpload(
            String::from_utf8_lossy(body).into_owned(),
        ));
    }
    if !status.is_success() {
        return Err(ClientError::StorageUpload(format!(
            "storage upload failed with status {}",
            status
        )));
    }
    Ok(())
}

pub(crate) fn io_error(file_path: &Path, source: std::io::Error) -> ClientError {
    ClientError::Io {
        path: file_path.to_path_buf(),
        source,
    }
}
