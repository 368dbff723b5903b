//! The configured rejection response.

use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http::StatusCode;
use serde_json::Value;
use tracing::warn;

use crate::config::ErrorResponseConfig;
use crate::error::ConfigError;
use crate::render::render;
use crate::response::Response;

/// A validated [`ErrorResponseConfig`]: header names, values, and the status
/// code are already in their `http` forms, so responding cannot fail.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    headers: HeaderMap,
    status: StatusCode,
    content_type: String,
    content_type_value: HeaderValue,
    body: Option<Value>,
}

impl ErrorResponse {
    pub fn from_config(config: ErrorResponseConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::with_capacity(config.headers.len());
        for (name, value) in &config.headers {
            headers.insert(parse_name(name)?, parse_value(name, value)?);
        }

        let status = StatusCode::from_u16(config.status_code)
            .map_err(|_| ConfigError::InvalidStatus(config.status_code))?;
        let content_type_value = parse_value(CONTENT_TYPE.as_str(), &config.content_type)?;

        Ok(Self {
            headers,
            status,
            content_type: config.content_type,
            content_type_value,
            body: config.body,
        })
    }

    pub fn status(&self) -> StatusCode { self.status }

    /// Builds the rejection: configured headers, then `Content-Type`, then the
    /// status, then the rendered body.
    ///
    /// If the body cannot be rendered, the render error's text is sent as the
    /// body instead. Status and headers stay exactly as configured.
    pub fn respond(&self) -> Response {
        let mut sink = Response::builder();
        for (name, value) in &self.headers {
            sink = sink.header(name, value.clone());
        }
        let sink = sink
            .header(CONTENT_TYPE, self.content_type_value.clone())
            .status(self.status);

        let Some(body) = &self.body else {
            return sink.no_body();
        };

        match render(body, &self.content_type) {
            Ok(text) => sink.body(text),
            Err(e) => {
                warn!(content_type = %self.content_type, "rejection body not rendered: {e}");
                sink.body(e.to_string())
            }
        }
    }
}

fn parse_name(name: &str) -> Result<HeaderName, ConfigError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidHeader {
        name: name.to_owned(),
        reason: e.to_string(),
    })
}

fn parse_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
        name: name.to_owned(),
        reason: e.to_string(),
    })
}
