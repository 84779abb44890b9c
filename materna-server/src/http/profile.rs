//! Risk profile endpoints
//!
//! Profiles are data-minimized: age bracket, gestation, enumerated conditions
//! and parity only.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use materna_core::{HealthDataReader, NewProfile, RiskProfile};

use crate::AppState;
use crate::error::ServerError;

/// PUT /api/users/:user_id/profile
pub async fn upsert(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(body): Json<NewProfile>,
) -> Result<Json<RiskProfile>, ServerError> {
    let profile = state.store.upsert_profile(&user_id, body).await?;
    Ok(Json(profile))
}

/// GET /api/users/:user_id/profile
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<RiskProfile>, ServerError> {
    let profile = state.store.profile(&user_id).await?;
    Ok(Json(profile))
}
