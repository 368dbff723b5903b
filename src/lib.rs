//! # authgate
//!
//! An `Authorization`-scheme gate for HTTP services behind a reverse proxy,
//! shipped with the minimal hyper-based framework it plugs into.
//!
//! ## The contract
//!
//! The gate looks at one thing: the scheme token at the front of the
//! `Authorization` header (`Bearer`, `Basic`, …). If it is on the configured
//! allow-list the request goes to the wrapped handler untouched. Otherwise the
//! gate answers with a fixed, configured error response.
//!
//! The gate does **not** authenticate. It never looks at the credential after
//! the scheme token; that is the job of the service behind it.
//!
//! ## Rejection bodies
//!
//! The configured body is an arbitrary JSON-like value. For
//! `application/json`, every string that parses as a number is sent as a
//! number, so a config file can say `"code": "401"` and clients see
//! `{"code":401}`. See [`render()`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use authgate::{Config, Gate, Request, Response, Router, Server};
//! use http::Method;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), authgate::Error> {
//!     let config = Config::from_json_str(r#"{
//!         "requiredHeaders": ["Bearer"],
//!         "errorResponse": {
//!             "statusCode": 403,
//!             "contentType": "application/json",
//!             "body": {"code": "403", "message": "forbidden"}
//!         }
//!     }"#)?;
//!     let gate = Gate::new(config, "users")?;
//!
//!     let app = Router::new()
//!         .on(Method::GET, "/users/{id}", gate.wrap(get_user));
//!
//!     Server::bind("0.0.0.0:3000")?.serve(app).await
//! }
//!
//! async fn get_user(req: Request) -> Response {
//!     let id = req.param("id").unwrap_or("unknown");
//!     Response::json(format!(r#"{{"id":"{id}"}}"#))
//! }
//! ```

mod config;
mod error;
mod handler;
mod render;
mod request;
mod response;
mod router;
mod server;

pub mod middleware;

pub use config::{Config, ErrorResponseConfig};
pub use error::{ConfigError, Error, RenderError};
pub use handler::Handler;
pub use middleware::{Decision, ErrorResponse, Gate, Gated, RejectReason};
pub use render::{APPLICATION_JSON, TEXT_PLAIN, render};
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
