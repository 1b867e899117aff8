use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::db::part_queries;
use crate::models::part::PartRecord;

#[derive(Debug, Deserialize)]
pub struct ListPartsParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// GET /api/v1/parts — list example parts for the selection UI.
pub async fn list_parts(
    State(state): State<AppState>,
    Query(params): Query<ListPartsParams>,
) -> Result<Json<Vec<PartRecord>>, StatusCode> {
    let limit = params.limit.clamp(1, 500);
    let parts = part_queries::list_parts(&state.db, limit).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list parts");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(parts))
}

/// GET /api/v1/parts/{part_number} — look up one part.
pub async fn get_part(
    State(state): State<AppState>,
    Path(part_number): Path<String>,
) -> Result<Json<PartRecord>, StatusCode> {
    let part = part_queries::get_part(&state.db, &part_number)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, %part_number, "Failed to fetch part");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(part))
}
