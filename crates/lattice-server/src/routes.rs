//! API route definitions.

use crate::handlers::{self, SharedState};
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router.
///
/// The CORS policy is permissive because the API serves the tool's own
/// local web UI and desktop shell; there is no cross-origin trust boundary
/// to enforce here.
pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/dependencies", get(handlers::dependency_graph))
        .route(
            "/api/dependencies/{filename}",
            get(handlers::plan_dependencies),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
