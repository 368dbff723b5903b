//! Gated route demo.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example gated -- demos/gate.toml
//!
//! Try:
//!   curl -i http://localhost:3000/users/42                               # 401, JSON body
//!   curl -i -H 'authorization: bearer abc' http://localhost:3000/users/42  # 401, wrong case
//!   curl -i -H 'authorization: Bearer abc' http://localhost:3000/users/42  # 200
//!   curl -i http://localhost:3000/healthz                                # 200, not gated

use authgate::{Config, Gate, Request, Response, Router, Server};
use http::Method;

#[tokio::main]
async fn main() -> Result<(), authgate::Error> {
    tracing_subscriber::fmt::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "demos/gate.toml".to_owned());
    let gate = Gate::new(Config::load(&path)?, "users")?;

    let app = Router::new()
        .on(Method::GET, "/users/{id}", gate.wrap(get_user))
        .on(Method::GET, "/healthz", healthz);

    Server::bind("0.0.0.0:3000")?.serve(app).await
}

async fn get_user(req: Request) -> Response {
    let id = req.param("id").unwrap_or("unknown");
    Response::json(format!(r#"{{"id":"{id}","name":"alice"}}"#))
}

async fn healthz(_req: Request) -> &'static str {
    "ok"
}
