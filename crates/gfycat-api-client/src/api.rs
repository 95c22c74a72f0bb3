//! Domain methods for the Gfycat API client.
//!
//! Response types come from `gfycat_core::models`.

use std::path::Path;

use gfycat_core::{ClipItem, EmbedInfo, LookupResponse, UrlCheckResult};

use crate::error::{ClientError, Result};
use crate::{endpoints, storage, ApiClient};

impl ApiClient {
    /// Ask Gfycat to fetch and transcode `remote_url`.
    ///
    /// With `name`, the clip is published under that name; otherwise the server picks one.
    pub async fn upload_by_url(&self, remote_url: &str, name: Option<&str>) -> Result<ClipItem> {
        let url = endpoints::upload_by_url(self.config(), remote_url, name);
        self.get_decoded(&url).await
    }

    /// Upload a local file straight to Gfycat's object storage under `name`, then fetch
    /// the transcoded clip's metadata.
    ///
    /// `name` is required because the status lookup needs the storage key up front.
    pub async fn upload_by_file(&self, file_path: impl AsRef<Path>, name: &str) -> Result<ClipItem> {
        let file_path = file_path.as_ref();
        storage::validate_upload_args(file_path, name)?;

        let data = tokio::fs::read(file_path)
            .await
            .map_err(|e| storage::io_error(file_path, e))?;
        let size_bytes = data.len();

        let form = storage::build_form(
            &self.config().storage_policy,
            name,
            storage::upload_file_name(file_path),
            data,
        );

        let storage_url = &self.config().storage_url;
        tracing::debug!(
            method = "POST",
            url = %storage_url,
            key = %name,
            size_bytes,
            "uploading clip to object storage"
        );

        let response = self
            .client()
            .post(storage_url.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::BodyRead)?;

        storage::storage_outcome(status, &body).inspect_err(|err| {
            tracing::warn!(key = %name, %status, error = %err, "object storage rejected upload");
        })?;

        let url = endpoints::upload_status(self.config(), name);
        self.get_decoded(&url).await
    }

    /// Fetch metadata of a published clip by name.
    pub async fn lookup_by_name(&self, name: &str) -> Result<LookupResponse> {
        let url = endpoints::lookup_by_name(self.config(), name);
        self.get_decoded(&url).await
    }

    /// Check whether `url` has already been turned into a clip.
    pub async fn check_url(&self, url: &str) -> Result<UrlCheckResult> {
        let request_url = endpoints::check_url(self.config(), url);
        self.get_decoded(&request_url).await
    }

    /// oEmbed metadata for a clip page, sized to fit `max_width` x `max_height`.
    pub async fn embed_info(
        &self,
        page_url: &str,
        max_width: u32,
        max_height: u32,
    ) -> Result<EmbedInfo> {
        let url = endpoints::embed_info(self.config(), page_url, max_width, max_height);
        self.get_decoded(&url).await
    }
}
