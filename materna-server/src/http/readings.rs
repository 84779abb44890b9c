//! Blood pressure reading endpoints
//!
//! Readings are stored as neutral observations; no interpretation is attached
//! at ingestion. Creating a reading commits first, then hands the assessment
//! to the runtime without delaying the response.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use materna_core::{BpReading, HealthDataReader, NewReading};
use serde::Deserialize;

use crate::AppState;
use crate::error::ServerError;

/// Query parameters for listing readings
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

/// POST /api/users/:user_id/readings
pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(body): Json<NewReading>,
) -> Result<(StatusCode, Json<BpReading>), ServerError> {
    let reading = state.store.record_reading(&user_id, body).await?;

    // Fire-and-forget: the response never waits for the assessment.
    let _ = state.engine.trigger(&user_id);

    Ok((StatusCode::CREATED, Json(reading)))
}

/// GET /api/users/:user_id/readings
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<BpReading>> {
    let limit = query.limit.unwrap_or(50);
    Json(state.store.readings_for_user(&user_id, limit).await)
}

/// GET /api/users/:user_id/readings/latest
pub async fn latest(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<BpReading>>, ServerError> {
    let reading = state.store.latest_reading(&user_id).await?;
    Ok(Json(reading))
}
