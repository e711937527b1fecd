use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Venues
        .route("/api/venues", get(handlers::list_venues))
        .route("/api/venues/add", post(handlers::add_venue))
        .route("/api/venues/search", post(handlers::search_venues))
        .route("/api/venues/{venue_id}", get(handlers::get_venue))

        .with_state(state)
}
