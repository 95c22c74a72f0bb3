use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::LenientNumber;

/// Whether a source URL has already been ingested, and the clip it became.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlCheckResult {
    #[serde_as(as = "DefaultOnNull")]
    pub url_known: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub gfy_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub gfy_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub webm_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub mp4_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub gif_url: String,
    #[serde_as(as = "LenientNumber")]
    pub frame_rate: f64,
}
