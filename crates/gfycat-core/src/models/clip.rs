use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::{LenientNumber, LenientString};

/// Metadata about one hosted clip.
///
/// Returned by both upload endpoints and, wrapped in [`LookupResponse`], by the
/// lookup endpoint. The upload endpoint spells a few keys in lower case
/// (`gfyname`, `gfysize`); those are accepted as aliases.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClipItem {
    #[serde_as(as = "DefaultOnNull")]
    pub gfy_id: String,
    #[serde(alias = "gfyname")]
    #[serde_as(as = "DefaultOnNull")]
    pub gfy_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub gfy_number: String,
    #[serde_as(as = "DefaultOnNull")]
    pub user_name: String,
    #[serde_as(as = "LenientNumber")]
    pub width: u32,
    #[serde_as(as = "LenientNumber")]
    pub height: u32,
    #[serde_as(as = "LenientNumber")]
    pub frame_rate: f64,
    #[serde_as(as = "LenientNumber")]
    pub num_frames: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub mp4_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub webm_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub gif_url: String,
    #[serde_as(as = "LenientNumber")]
    pub gif_size: u64,
    #[serde_as(as = "LenientNumber")]
    pub mp4_size: u64,
    #[serde_as(as = "LenientNumber")]
    pub webm_size: u64,
    /// Creation time as sent: usually epoch seconds. See [`ClipItem::created_at`].
    #[serde_as(as = "LenientString")]
    pub create_date: String,
    #[serde_as(as = "LenientNumber")]
    pub views: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub extra_lemmas: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub md5: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tags: Vec<String>,
    /// NSFW flag as sent (`"0"`, `1`, `"false"`, ...). See [`ClipItem::is_nsfw`].
    #[serde_as(as = "LenientString")]
    pub nsfw: String,
    #[serde_as(as = "DefaultOnNull")]
    pub sar: String,
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub source: String,
    #[serde_as(as = "DefaultOnNull")]
    pub dynamo: String,
    #[serde_as(as = "DefaultOnNull")]
    pub subreddit: String,
    #[serde_as(as = "DefaultOnNull")]
    pub reddit_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub reddit_id_text: String,
    #[serde_as(as = "DefaultOnNull")]
    pub upload_gif_name: String,
    #[serde_as(as = "LenientNumber")]
    pub likes: i64,
    #[serde_as(as = "LenientNumber")]
    pub dislikes: i64,
    #[serde_as(as = "LenientNumber")]
    pub published: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    pub extra_lemma_text: String,
    #[serde_as(as = "DefaultOnNull")]
    pub url_md5: String,
    #[serde_as(as = "DefaultOnNull")]
    pub task: String,
    #[serde(alias = "gfysize")]
    #[serde_as(as = "LenientNumber")]
    pub gfy_size: u64,
    // The API misspells this key.
    #[serde(rename = "copyrightClaimaint")]
    #[serde_as(as = "DefaultOnNull")]
    pub copyright_claimant: String,
}

impl ClipItem {
    /// First non-empty media URL, preferring WebM, then MP4, then GIF.
    pub fn primary_media_url(&self) -> Option<&str> {
        [&self.webm_url, &self.mp4_url, &self.gif_url]
            .into_iter()
            .map(String::as_str)
            .find(|url| !url.is_empty())
    }

    /// Creation time, from epoch seconds, RFC 3339 or a plain `YYYY-MM-DD` date.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.create_date.trim();
        if let Ok(secs) = raw.parse::<i64>() {
            return (secs > 0).then(|| DateTime::from_timestamp(secs, 0)).flatten();
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    }

    /// Empty, `0` and `false` mean safe content; anything else is flagged.
    pub fn is_nsfw(&self) -> bool {
        !matches!(
            self.nsfw.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "false"
        )
    }
}

/// Lookup-by-name response: a single nested [`ClipItem`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupResponse {
    pub gfy_item: ClipItem,
}
