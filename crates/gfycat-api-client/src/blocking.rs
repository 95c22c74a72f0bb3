//! Synchronous Gfycat client built on `reqwest::blocking`.
//!
//! Same endpoints, form layout and decoding as the async [`crate::ApiClient`]; every
//! call blocks the current thread until the response body has been read. Do not call
//! it from inside an async runtime.

use std::path::Path;

use gfycat_core::{ClientConfig, ClipItem, EmbedInfo, LookupResponse, UrlCheckResult};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::{decode_body, endpoints, storage};

/// Blocking HTTP client for the Gfycat API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        // reqwest::blocking applies a 30s timeout unless told otherwise.
        let mut builder = Client::builder().timeout(config.timeout);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(method = "GET", url = %url, "sending Gfycat request");

        let response = self.client.get(url).send().map_err(ClientError::Transport)?;
        let status = response.status();
        let body = response.bytes().map_err(ClientError::BodyRead)?;

        tracing::debug!(
            method = "GET",
            url = %url,
            %status,
            body_bytes = body.len(),
            "received Gfycat response"
        );

        Ok(body.to_vec())
    }

    fn get_decoded<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url)?;
        decode_body(url, &body)
    }

    pub fn upload_by_url(&self, remote_url: &str, name: Option<&str>) -> Result<ClipItem> {
        self.get_decoded(&endpoints::upload_by_url(&self.config, remote_url, name))
    }

    pub fn upload_by_file(&self, file_path: impl AsRef<Path>, name: &str) -> Result<ClipItem> {
        let file_path = file_path.as_ref();
        storage::validate_upload_args(file_path, name)?;

        let data = std::fs::read(file_path).map_err(|e| storage::io_error(file_path, e))?;
        let size_bytes = data.len();
        let form = storage::build_blocking_form(
            &self.config.storage_policy,
            name,
            storage::upload_file_name(file_path),
            data,
        );

        tracing::debug!(
            method = "POST",
            url = %self.config.storage_url,
            key = %name,
            size_bytes,
            "uploading clip to object storage"
        );

        let response = self
            .client
            .post(self.config.storage_url.as_str())
            .multipart(form)
            .send()
            .map_err(ClientError::Transport)?;
        let status = response.status();
        let body = response.bytes().map_err(ClientError::BodyRead)?;

        storage::storage_outcome(status, &body).inspect_err(|err| {
            tracing::warn!(key = %name, %status, error = %err, "object storage rejected upload");
        })?;

        self.get_decoded(&endpoints::upload_status(&self.config, name))
    }

    pub fn lookup_by_name(&self, name: &str) -> Result<LookupResponse> {
        self.get_decoded(&endpoints::lookup_by_name(&self.config, name))
    }

    pub fn check_url(&self, url: &str) -> Result<UrlCheckResult> {
        self.get_decoded(&endpoints::check_url(&self.config, url))
    }

    pub fn embed_info(&self, page_url: &str, max_width: u32, max_height: u32) -> Result<EmbedInfo> {
        self.get_decoded(&endpoints::embed_info(
            &self.config,
            page_url,
            max_width,
            max_height,
        ))
    }
}
