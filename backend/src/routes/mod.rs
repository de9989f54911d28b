//! Route definitions for the FitTrack API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod goals;
mod health;
mod nutrition;
mod nutrition_ai;
mod stats;
mod workout_ai;
mod workouts;

pub use auth::auth_routes;
pub use goals::goals_routes;
pub use nutrition::nutrition_routes;
pub use nutrition_ai::nutrition_ai_routes;
pub use stats::stats_routes;
pub use workout_ai::workout_ai_routes;
pub use workouts::workouts_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "FitTrack API v1" }))
        .nest("/auth", auth::auth_routes())
        .nest("/goals", goals::goals_routes())
        .nest("/workouts", workouts::workouts_routes())
        .nest("/nutrition", nutrition::nutrition_routes())
        .nest("/nutrition-ai", nutrition_ai::nutrition_ai_routes())
        .nest("/workout-ai", workout_ai::workout_ai_routes())
        .nest("/stats", stats::stats_routes())
}
