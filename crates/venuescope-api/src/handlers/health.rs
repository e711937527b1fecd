use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let venues = state.service.health_check().await.map_err(|e| {
        tracing::error!(error = %e, backend = state.backend, "Health check failed");
        ApiError::from(e)
    })?;

    Ok(Json(HealthResponse::ok(state.backend, venues)))
}
