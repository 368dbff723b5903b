//! Error types.
//!
//! Application-level outcomes (404, a rejected `Authorization` header) are
//! expressed as [`Response`](crate::Response) values, not as errors. The types
//! here surface the three things that can actually fail: serving (bind /
//! accept), building a gate from configuration, and rendering a rejection body.

use std::path::PathBuf;

/// Infrastructure failures returned by the server and by fallible setup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid socket address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

/// Fatal, construction-time configuration errors.
///
/// A gate is never instantiated from a configuration that produces one of
/// these.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown config format for {0} (expected .json or .toml)")]
    UnknownFormat(PathBuf),

    #[error("requiredHeaders must not be empty")]
    EmptyRequiredHeaders,

    #[error("invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("invalid status code {0}")]
    InvalidStatus(u16),
}

/// Failures while serializing a configured rejection body.
///
/// These never leave the responder: their `Display` text becomes the body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("failed to serialize JSON: {0}")]
    Serialization(String),
}
