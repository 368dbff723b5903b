//! `Authorization` scheme gate.
//!
//! The gate checks only that the header's scheme token (everything before
//! the first space) is on the allow-list. The credential after it is neither
//! validated nor logged.

use std::future;
use std::sync::Arc;

use http::HeaderMap;
use http::header::AUTHORIZATION;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ConfigError;
use crate::handler::{BoxFuture, BoxedHandler, ErasedHandler, Handler, private};
use crate::middleware::reject::ErrorResponse;
use crate::request::Request;
use crate::response::Response;

/// Outcome of inspecting one request's headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Reject(RejectReason),
}

/// Why a request was rejected. Every reason gets the same configured response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No `Authorization` header, or an empty one.
    Missing,
    /// The header starts with a space, so the scheme token is empty.
    EmptyScheme,
    /// The scheme token is not on the allow-list.
    UnrecognizedScheme,
}

impl RejectReason {
    fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::EmptyScheme => "empty scheme",
            Self::UnrecognizedScheme => "unrecognized scheme",
        }
    }
}

/// A configured gate. Cheap to clone; every clone shares the same immutable
/// state, so one gate can front any number of routes and concurrent requests.
///
/// ```rust
/// use authgate::{Config, Decision, Gate};
/// use http::HeaderMap;
///
/// let config = Config::from_json_str(r#"{"requiredHeaders": ["Bearer"]}"#)?;
/// let gate = Gate::new(config, "api")?;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("authorization", "Bearer abc".parse().unwrap());
/// assert_eq!(gate.decide(&headers), Decision::Allow);
/// # Ok::<(), authgate::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Gate {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    name: String,
    accepted: Vec<String>,
    rejection: ErrorResponse,
}

impl Gate {
    /// Validates `config` and builds a gate labelled `name` in logs.
    ///
    /// Fails with [`ConfigError::EmptyRequiredHeaders`] when no scheme token
    /// is configured, and with the errors of
    /// [`ErrorResponse::from_config`] for an unrepresentable rejection.
    pub fn new(config: Config, name: impl Into<String>) -> Result<Self, ConfigError> {
        if config.required_headers.is_empty() {
            return Err(ConfigError::EmptyRequiredHeaders);
        }
        let rejection = ErrorResponse::from_config(config.error_response)?;
        let name = name.into();

        info!(
            gate = %name,
            accepted = ?config.required_headers,
            status = rejection.status().as_u16(),
            "auth gate configured",
        );

        Ok(Self {
            inner: Arc::new(Inner { name, accepted: config.required_headers, rejection }),
        })
    }

    pub fn name(&self) -> &str { &self.inner.name }
    pub fn accepted(&self) -> &[String] { &self.inner.accepted }

    /// Decides whether a request with these headers may pass.
    ///
    /// Only the first `Authorization` value is considered. Its scheme token
    /// is compared byte-for-byte (case-sensitive) against the allow-list.
    pub fn decide(&self, headers: &HeaderMap) -> Decision {
        let value = match headers.get(AUTHORIZATION) {
            Some(v) if !v.is_empty() => v.as_bytes(),
            _ => return Decision::Reject(RejectReason::Missing),
        };

        let scheme = value.split(|&b| b == b' ').next().unwrap_or_default();
        if scheme.is_empty() {
            return Decision::Reject(RejectReason::EmptyScheme);
        }

        if self.inner.accepted.iter().any(|token| token.as_bytes() == scheme) {
            Decision::Allow
        } else {
            Decision::Reject(RejectReason::UnrecognizedScheme)
        }
    }

    /// The response sent for every rejected request.
    pub fn respond(&self) -> Response {
        self.inner.rejection.respond()
    }

    /// Puts the gate in front of `next`. The result is itself a [`Handler`]
    /// and can be registered on a [`Router`](crate::Router) directly.
    pub fn wrap(&self, next: impl Handler) -> Gated {
        Gated { gate: self.clone(), next: next.into_boxed_handler() }
    }
}

/// A handler behind a [`Gate`]. Built by [`Gate::wrap`].
///
/// Allowed requests are handed to the inner handler untouched; rejected ones
/// are answered immediately with the configured response.
pub struct Gated {
    gate: Gate,
    next: BoxedHandler,
}

impl ErasedHandler for Gated {
    fn call(&self, req: Request) -> BoxFuture {
        match self.gate.decide(req.headers()) {
            Decision::Allow => {
                debug!(gate = %self.gate.name(), path = %req.path(), "request allowed");
                self.next.call(req)
            }
            Decision::Reject(reason) => {
                debug!(
                    gate = %self.gate.name(),
                    path = %req.path(),
                    reason = reason.as_str(),
                    "request rejected",
                );
                Box::pin(future::ready(self.gate.respond()))
            }
        }
    }
}

impl private::Sealed for Gated {}

impl Handler for Gated {
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn gate(tokens: &[&str]) -> Gate {
        let config = Config {
            required_headers: tokens.iter().map(|t| (*t).to_owned()).collect(),
            ..Config::default()
        };
        Gate::new(config, "test").unwrap()
    }

    fn auth(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn empty_token_list_is_a_config_error() {
        let err = Gate::new(Config::default(), "test").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRequiredHeaders));
        assert_eq!(err.to_string(), "requiredHeaders must not be empty");
    }

    #[test]
    fn missing_or_empty_header_rejects() {
        let gate = gate(&["Bearer"]);
        assert_eq!(gate.decide(&HeaderMap::new()), Decision::Reject(RejectReason::Missing));
        assert_eq!(gate.decide(&auth("")), Decision::Reject(RejectReason::Missing));
    }

    #[test]
    fn leading_space_gives_empty_scheme() {
        let gate = gate(&["Bearer"]);
        assert_eq!(gate.decide(&auth(" Bearer abc")), Decision::Reject(RejectReason::EmptyScheme));
    }

    #[test]
    fn scheme_match_is_exact_and_case_sensitive() {
        let gate = gate(&["Bearer", "Basic"]);

        assert_eq!(gate.decide(&auth("Bearer abc")), Decision::Allow);
        assert_eq!(gate.decide(&auth("Basic dXNlcjpwYXNz")), Decision::Allow);

        for value in ["bearer abc", "BEARER abc", "Bear abc", "Bearerx abc", "Digest x"] {
            assert_eq!(
                gate.decide(&auth(value)),
                Decision::Reject(RejectReason::UnrecognizedScheme),
                "{value}",
            );
        }
    }

    #[test]
    fn header_without_space_is_all_scheme() {
        let gate = gate(&["Bearer"]);
        assert_eq!(gate.decide(&auth("Bearer")), Decision::Allow);
        assert_eq!(gate.decide(&auth("Bearer ")), Decision::Allow);
        assert_eq!(
            gate.decide(&auth("Bearer\tabc")),
            Decision::Reject(RejectReason::UnrecognizedScheme),
        );
    }

    #[test]
    fn only_first_header_value_counts() {
        let gate = gate(&["Bearer"]);
        let mut headers = HeaderMap::new();
        headers.append(AUTHORIZATION, HeaderValue::from_static("Digest x"));
        headers.append(AUTHORIZATION, HeaderValue::from_static("Bearer y"));
        assert_eq!(gate.decide(&headers), Decision::Reject(RejectReason::UnrecognizedScheme));
    }

    #[test]
    fn token_order_does_not_matter() {
        let a = gate(&["Basic", "Bearer"]);
        let b = gate(&["Bearer", "Basic"]);
        for value in ["Basic x", "Bearer y", "Token z"] {
            assert_eq!(a.decide(&auth(value)), b.decide(&auth(value)), "{value}");
        }
    }

    #[test]
    fn clones_share_configuration() {
        let gate = gate(&["Bearer"]);
        let clone = gate.clone();
        assert!(Arc::ptr_eq(&gate.inner, &clone.inner));
        assert_eq!(clone.accepted(), ["Bearer".to_owned()]);
        assert_eq!(clone.name(), "test");
    }
}
