//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, contents, health, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(content_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me", get(users::get_current_user))
}

/// Content routes
///
/// PUT and PATCH both reach the partial-update handler.
fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/contents", get(contents::list_contents))
        .route("/contents", post(contents::create_content))
        .route("/contents/:content_id", get(contents::get_content))
        .route("/contents/:content_id", put(contents::update_content))
        .route("/contents/:content_id", patch(contents::update_content))
        .route("/contents/:content_id", delete(contents::delete_content))
}
