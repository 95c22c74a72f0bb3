use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::LenientNumber;

/// Error envelope the API returns in place of a success body.
///
/// Only `error` is required; a body without a string `error` field is not an envelope.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerError {
    #[serde(default, alias = "gfyName", alias = "gfyname")]
    #[serde_as(as = "DefaultOnNull")]
    pub gif_name: String,
    pub error: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub task: String,
    #[serde(default)]
    #[serde_as(as = "LenientNumber")]
    pub time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_with_gfy_name_alias() {
        let body = r#"{"gfyName":"FancyName","error":"Invalid URL","task":"error","time":"1435867421"}"#;

        let envelope: ServerError = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.gif_name, "FancyName");
        assert_eq!(envelope.error, "Invalid URL");
        assert_eq!(envelope.time, 1435867421);
    }

    #[test]
    fn error_field_is_required() {
        assert!(serde_json::from_str::<ServerError>(r#"{"task":"error"}"#).is_err());
        assert!(serde_json::from_str::<ServerError>(r#"{"error":null}"#).is_err());
    }
}
