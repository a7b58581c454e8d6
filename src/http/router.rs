//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;

/// Create the main application router with all routes and middleware.
pub fn create_router() -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints. The three engines are
    // independent; each route group could be mounted in its own process
    // unchanged.
    let api_v1 = Router::new()
        // Agenda scheduler
        .route("/agenda", post(handlers::generate_agenda))
        // Deadline classifier
        .route("/overdue", post(handlers::find_overdue))
        .route("/atrisk", post(handlers::find_at_risk))
        // Weekly aggregator
        .route("/weekly-summary", post(handlers::weekly_summary));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
