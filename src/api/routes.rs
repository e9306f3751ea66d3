//! API Routes
//!
//! Configures the Axum router with all registry endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    benefits_handler, health_handler, register_handler, stats_handler, update_criteria_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /users` - Register a profile
/// - `GET /users/:id/benefits` - Eligible benefits for a user
/// - `PUT /users/:id/criteria` - Replace a user's criteria and city
/// - `GET /stats` - Eligibility cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/users", post(register_handler))
        .route("/users/:id/benefits", get(benefits_handler))
        .route("/users/:id/criteria", put(update_criteria_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
