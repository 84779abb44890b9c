//! HTTP routing

pub mod api;
pub mod care_priority;
pub mod profile;
pub mod readings;
pub mod symptoms;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::CorsLayer;

use crate::AppState;

/// Build the API router over the shared state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        .route(
            "/api/users/:user_id/readings",
            post(readings::create).get(readings::list),
        )
        .route("/api/users/:user_id/readings/latest", get(readings::latest))
        .route(
            "/api/users/:user_id/symptoms",
            post(symptoms::create).get(symptoms::list),
        )
        .route(
            "/api/users/:user_id/profile",
            put(profile::upsert).get(profile::get_profile),
        )
        .route("/api/users/:user_id/care-priority", get(care_priority::current))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
