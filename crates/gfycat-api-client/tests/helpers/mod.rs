//! Shared helpers for client integration tests.

#![allow(dead_code)]

use gfycat_api_client::ApiClient;
use gfycat_core::ClientConfig;
use wiremock::MockServer;

/// Config with every endpoint pointed at the mock server.
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig::with_single_host(&server.uri())
}

pub fn mock_client(server: &MockServer) -> ApiClient {
    ApiClient::new(mock_config(server)).expect("Failed to create test client")
}

/// Upload/status response body for a finished clip.
pub fn clip_body(name: &str) -> String {
    serde_json::json!({
        "gfyname": name,
        "gfysize": 52731,
        "gifSize": "1829146",
        "mp4Url": format!("https://zippy.gfycat.com/{}.mp4", name),
        "webmUrl": format!("https://zippy.gfycat.com/{}.webm", name),
        "gifUrl": format!("https://giant.gfycat.com/{}.gif", name),
        "frameRate": 14,
        "numFrames": "93",
        "gifWidth": 400,
        "task": "complete"
    })
    .to_string()
}
