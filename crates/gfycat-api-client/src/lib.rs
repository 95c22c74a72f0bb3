//! HTTP client for the Gfycat API.
//!
//! Provides a minimal client over an injectable `reqwest::Client`, a shared
//! fetch-then-decode helper, and the domain methods (upload by URL or file, lookup,
//! URL check, oEmbed). Enable the `blocking` feature for a synchronous variant.

pub mod api;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod endpoints;
pub mod error;
pub(crate) mod storage;

use anyhow::Context;
use gfycat_core::{decode_response, ClientConfig};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub use error::{ClientError, Result};

/// HTTP client for the Gfycat API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Build a client from `config`, applying its timeout and user agent.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Use a caller-configured `reqwest::Client`. Timeout and user agent settings in
    /// `config` are ignored; the caller's client decides those.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Create client from environment. See [`ClientConfig::from_env`].
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env().context("Failed to load Gfycat client config")?;
        Self::new(config).context("Failed to create Gfycat API client")
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Raw client for custom requests.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// GET `url` and return the full response body.
    pub(crate) async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(method = "GET", url = %url, "sending Gfycat request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::BodyRead)?;

        tracing::debug!(
            method = "GET",
            url = %url,
            %status,
            body_bytes = body.len(),
            "received Gfycat response"
        );

        Ok(body.to_vec())
    }

    /// GET `url` and decode the body, surfacing a server error envelope as
    /// [`ClientError::Server`].
    pub(crate) async fn get_decoded<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        decode_body(url, &body)
    }
}

pub(crate) fn decode_body<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    decode_response(body).map_err(|err| {
        match err.server_message() {
            Some(message) => {
                tracing::warn!(url = %url, error = %message, "Gfycat reported an error")
            }
            None => tracing::debug!(url = %url, error = %err, "Gfycat response did not decode"),
        }
        ClientError::from(err)
    })
}

// Re-export response types for convenience.
pub use gfycat_core::{ClipItem, EmbedInfo, LookupResponse, StoragePolicy, UrlCheckResult};
