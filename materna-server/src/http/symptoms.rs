//! Symptom reporting endpoints
//!
//! One symptom per record, enumerated vocabulary only. Creating a symptom
//! commits first, then hands the assessment to the runtime.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use materna_core::{NewSymptom, SymptomRecord};
use serde::Deserialize;

use crate::AppState;
use crate::error::ServerError;

/// Query parameters for listing symptoms
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

/// POST /api/users/:user_id/symptoms
pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(body): Json<NewSymptom>,
) -> Result<(StatusCode, Json<SymptomRecord>), ServerError> {
    let record = state.store.record_symptom(&user_id, body).await?;

    // Fire-and-forget: the response never waits for the assessment.
    let _ = state.engine.trigger(&user_id);

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/users/:user_id/symptoms
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<SymptomRecord>> {
    let limit = query.limit.unwrap_or(100);
    Json(state.store.symptoms_for_user(&user_id, limit).await)
}
