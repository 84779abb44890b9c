//! Care priority query endpoint
//!
//! Read-only and side-effect free: classifies on demand and returns the
//! priority with its fixed next-step message. Degraded or missing data yields
//! the conservative result with success semantics, never an error.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use materna_core::PrioritySummary;

use crate::AppState;

/// GET /api/users/:user_id/care-priority
pub async fn current(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Json<PrioritySummary> {
    Json(state.engine.current_priority(&user_id).await)
}
