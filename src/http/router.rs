//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! the static frontend fallback, and creates the axum router ready for
//! serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
///
/// Requests that match no API route fall through to the static frontend
/// directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/weather", get(handlers::get_weather))
        .route("/objects", get(handlers::list_objects))
        .route("/objects/visible", get(handlers::visible_objects_handler))
        .route("/telescope/status", get(handlers::telescope_status))
        .route("/telescope/config", post(handlers::update_telescope_config))
        .route("/telescope/target", post(handlers::set_telescope_target));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
