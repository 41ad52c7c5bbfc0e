pub mod health;
pub mod members;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Members
        .route(members::MEMBERS_PATH, get(members::list_members))
        .route("/members/nav", get(members::members_navigation))
}
