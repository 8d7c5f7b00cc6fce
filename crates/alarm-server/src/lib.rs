//! HTTP surface of the alarm service.
//!
//! [`router`] holds the single route, `GET /name`, so the binary and the
//! tests share one route table. Everything else falls through to axum's
//! default 404/405 responses.

pub mod config;
pub mod handlers;

use axum::routing::get;
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use config::{ConfigError, ServerConfig};

/// Builds the application router with request tracing applied.
pub fn router() -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/name", get(handlers::name::get_name))
        .layer(trace_layer)
}
