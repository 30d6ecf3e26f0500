//! HTTP API server for the Alafia quotes service.
//!
//! Serves a welcome message, a health check, a random quote and the full
//! quote list as JSON, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use quotes::{IndexSource, QuoteList, ThreadRngSource};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::quotes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: IndexSource + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::root::index))
        .route("/health", get(routes::health::check))
        .route("/quote", get(routes::quotes::random::<R>))
        .route("/quotes", get(routes::quotes::list::<R>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state: the built-in quote list picked
/// with the thread-local rng.
pub fn create_default_state() -> Arc<AppState<ThreadRngSource>> {
    Arc::new(AppState::new(QuoteList::default(), ThreadRngSource))
}
