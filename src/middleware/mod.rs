//! Middleware layer.
//!
//! Middleware wraps a handler and decides, per request, whether the inner
//! handler runs at all. The built-in middleware is the `Authorization` scheme
//! gate:
//!
//! ```rust,no_run
//! use authgate::{Config, Gate, Request, Response, Router, Server};
//! use http::Method;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), authgate::Error> {
//! let gate = Gate::new(Config::load("gate.toml")?, "api")?;
//!
//! let app = Router::new()
//!     .on(Method::GET, "/private", gate.wrap(private))
//!     .on(Method::GET, "/public",  public);
//!
//! Server::bind("0.0.0.0:3000")?.serve(app).await
//! # }
//! # async fn private(_: Request) -> Response { Response::text("secret") }
//! # async fn public(_: Request) -> Response { Response::text("hello") }
//! ```

mod reject;
mod require_auth;

pub use reject::ErrorResponse;
pub use require_auth::{Decision, Gate, Gated, RejectReason};
