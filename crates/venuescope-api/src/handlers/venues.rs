use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use venuescope_core::error::VenueError;
use venuescope_core::models::{Venue, VenueId};

use crate::dto::{AddVenueRequest, AddVenueResponse, SearchRequest, VenueHit};
use crate::error::ApiError;
use crate::state::AppState;

/// Log store failures at error level, request problems at info
fn log_failure(operation: &str, err: &VenueError) {
    if err.is_retryable() {
        tracing::error!(error = %err, operation, "Venue store failure");
    } else {
        tracing::info!(error = %err, operation, "Venue request rejected");
    }
}

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Venue>>, ApiError> {
    let venues = state.service.list_venues().await.map_err(|e| {
        log_failure("list", &e);
        ApiError::from(e)
    })?;

    tracing::info!(count = venues.len(), "Listed venues");
    Ok(Json(venues))
}

pub async fn get_venue(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
) -> Result<Json<Venue>, ApiError> {
    // A malformed id cannot name a stored venue
    let id: VenueId = venue_id
        .parse()
        .map_err(|_| ApiError::from(VenueError::NotFound { id: venue_id.clone() }))?;

    let venue = state.service.get_venue(id).await.map_err(|e| {
        log_failure("get", &e);
        ApiError::from(e)
    })?;

    Ok(Json(venue))
}

pub async fn add_venue(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddVenueRequest>, JsonRejection>,
) -> Result<Json<AddVenueResponse>, ApiError> {
    let Json(request) = payload?;
    let venue = state.service.add_venue(request.into()).await.map_err(|e| {
        log_failure("add", &e);
        ApiError::from(e)
    })?;

    tracing::info!(venue_id = %venue.id, category = %venue.category, "Added venue");
    Ok(Json(AddVenueResponse { success: true, venue }))
}

pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<VenueHit>>, ApiError> {
    let Json(request) = payload?;
    let hits = state.service.search_ranked(&request.into()).await.map_err(|e| {
        log_failure("search", &e);
        ApiError::from(e)
    })?;

    tracing::info!(matches = hits.len(), "Venue search");
    Ok(Json(hits.into_iter().map(VenueHit::from).collect()))
}
