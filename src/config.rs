//! Gate configuration.
//!
//! ```text
//! config file (.json / .toml)
//!     → Config (serde, every field defaulted)
//!     → Gate::new (semantic checks, fails fast)
//!     → Gate (validated, immutable, shared via Arc)
//! ```
//!
//! Field names follow the plugin's public configuration surface:
//!
//! ```json
//! {
//!   "requiredHeaders": ["Bearer", "Basic"],
//!   "errorResponse": {
//!     "headers": { "WWW-Authenticate": "Bearer" },
//!     "statusCode": 401,
//!     "contentType": "application/json",
//!     "body": { "code": "401", "message": "unauthorized" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

/// Root configuration for one gate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Accepted scheme tokens, matched case-sensitively. Must not be empty.
    pub required_headers: Vec<String>,

    /// Response sent for every rejected request.
    pub error_response: ErrorResponseConfig,
}

/// The configured rejection response, as written in the config file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorResponseConfig {
    /// Extra headers applied verbatim to every rejection.
    pub headers: BTreeMap<String, String>,

    pub status_code: u16,

    /// Also sent as the `Content-Type` header, overriding any entry of the
    /// same name in `headers`.
    pub content_type: String,

    /// Arbitrary JSON-like body. `None` (omitted or `null`) sends no body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl Default for ErrorResponseConfig {
    fn default() -> Self {
        Self {
            headers: BTreeMap::new(),
            status_code: 401,
            content_type: "text/plain".to_owned(),
            body: None,
        }
    }
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a config file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let parse = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(ConfigError::UnknownFormat(path.to_owned())),
        };
        parse(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let config = Config::from_json_str(r#"{"requiredHeaders": ["Bearer"]}"#).unwrap();

        assert_eq!(config.required_headers, vec!["Bearer"]);
        assert_eq!(config.error_response, ErrorResponseConfig::default());
        assert_eq!(config.error_response.status_code, 401);
        assert_eq!(config.error_response.content_type, "text/plain");
        assert!(config.error_response.body.is_none());
    }

    #[test]
    fn json_body_keeps_arbitrary_structure() {
        let config = Config::from_json_str(
            r#"{
                "requiredHeaders": ["Bearer", "Basic"],
                "errorResponse": {
                    "headers": {"X-Reason": "auth"},
                    "statusCode": 403,
                    "contentType": "application/json",
                    "body": {"code": "403", "items": ["1", true, null]}
                }
            }"#,
        )
        .unwrap();

        let error = &config.error_response;
        assert_eq!(error.status_code, 403);
        assert_eq!(error.headers.get("X-Reason").map(String::as_str), Some("auth"));
        assert_eq!(error.body, Some(json!({"code": "403", "items": ["1", true, null]})));
    }

    #[test]
    fn json_null_body_is_absent() {
        let config = Config::from_json_str(r#"{"errorResponse": {"body": null}}"#).unwrap();
        assert!(config.error_response.body.is_none());
    }

    #[test]
    fn toml_config_parses() {
        let config = Config::from_toml_str(
            r#"
            requiredHeaders = ["Bearer"]

            [errorResponse]
            statusCode = 403
            contentType = "application/json"

            [errorResponse.headers]
            WWW-Authenticate = "Bearer"

            [errorResponse.body]
            code = "403"
            reasons = ["missing", "unknown"]
            "#,
        )
        .unwrap();

        assert_eq!(config.required_headers, vec!["Bearer"]);
        assert_eq!(config.error_response.status_code, 403);
        assert_eq!(
            config.error_response.headers.get("WWW-Authenticate").map(String::as_str),
            Some("Bearer"),
        );
        assert_eq!(
            config.error_response.body,
            Some(json!({"code": "403", "reasons": ["missing", "unknown"]})),
        );
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("gate.json");
        fs::write(&json_path, r#"{"requiredHeaders": ["Basic"]}"#).unwrap();
        assert_eq!(Config::load(&json_path).unwrap().required_headers, vec!["Basic"]);

        let toml_path = dir.path().join("gate.toml");
        fs::write(&toml_path, r#"requiredHeaders = ["Bearer"]"#).unwrap();
        assert_eq!(Config::load(&toml_path).unwrap().required_headers, vec!["Bearer"]);

        let yaml_path = dir.path().join("gate.yaml");
        assert!(matches!(Config::load(&yaml_path), Err(ConfigError::UnknownFormat(_))));

        let missing = dir.path().join("missing.json");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Config::from_json_str("{"), Err(ConfigError::Json(_))));
    }
}
