//! The recipe application as a single [`Router`], used by `main.rs` and by
//! the integration tests alike.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Page routes wrapped in the request pipeline.
///
/// Outermost first: CORS answers preflights before anything else runs, every
/// request then gets an `x-request-id` that the trace span records and the
/// response echoes back. A handler that overruns `request_timeout_secs`
/// answers `408`, and a panicking handler answers `500` instead of dropping
/// the connection.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let pipeline = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(REQUEST_ID, MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(REQUEST_ID))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(CatchPanicLayer::new());

    // CORS is applied as a separate, outer layer: `Cors` needs a response body
    // that implements `Default`, which the traced body type does not, while
    // `Router::layer` boxes the inner pipeline's body into axum's `Body`.
    routes::app_routes()
        .layer(pipeline)
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the recipe pages: form posts and page loads from the configured
/// origins. Origins that are not valid header values are logged and skipped.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
