use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::LenientNumber;

/// oEmbed metadata for embedding a clip page.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedInfo {
    #[serde_as(as = "DefaultOnNull")]
    pub version: String,
    /// oEmbed resource type, usually `video`.
    #[serde(rename = "type")]
    #[serde_as(as = "DefaultOnNull")]
    pub kind: String,
    #[serde_as(as = "DefaultOnNull")]
    pub provider_name: String,
    #[serde_as(as = "LenientNumber")]
    pub width: u32,
    #[serde_as(as = "LenientNumber")]
    pub height: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    /// Embed markup, an `<iframe>` snippet.
    #[serde_as(as = "DefaultOnNull")]
    pub html: String,
}
