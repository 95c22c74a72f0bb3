//! Request URL construction.
//!
//! Path segments and query values are percent-encoded with `urlencoding`, which leaves
//! only `A-Z a-z 0-9 - _ . ~` as-is. Trailing `/` on configured hosts is ignored.

use gfycat_core::ClientConfig;
use urlencoding::encode;

fn host(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// `{upload}/transcodeRelease/{name}?fetchUrl=..` when a name is given, else
/// `{upload}/transcode?fetchUrl=..`. An empty name counts as no name.
pub fn upload_by_url(config: &ClientConfig, remote_url: &str, name: Option<&str>) -> String {
    match name.filter(|n| !n.is_empty()) {
        Some(name) => format!(
            "{}/transcodeRelease/{}?fetchUrl={}",
            host(&config.upload_url),
            encode(name),
            encode(remote_url)
        ),
        None => format!(
            "{}/transcode?fetchUrl={}",
            host(&config.upload_url),
            encode(remote_url)
        ),
    }
}

/// Status of a clip uploaded straight to object storage under `name`.
pub fn upload_status(config: &ClientConfig, name: &str) -> String {
    format!("{}/transcode/{}", host(&config.upload_url), encode(name))
}

pub fn lookup_by_name(config: &ClientConfig, name: &str) -> String {
    format!("{}/cajax/get/{}", host(&config.base_url), encode(name))
}

pub fn check_url(config: &ClientConfig, url: &str) -> String {
    format!("{}/cajax/checkUrl/{}", host(&config.base_url), encode(url))
}

pub fn embed_info(config: &ClientConfig, page_url: &str, max_width: u32, max_height: u32) -> String {
    format!(
        "{}/v1/oembed?url={}&maxwidth={}&maxheight={}",
        host(&config.api_url),
        encode(page_url),
        max_width,
        max_height
    )
}
