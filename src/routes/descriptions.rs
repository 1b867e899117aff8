use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::models::description::{DescriptionCode, GeneratedDescription};
use crate::models::generation::{
    CatalogEntry, GenerateRequest, GenerateResponse, JobStatusResponse, ValidateRequest,
};
use crate::models::job::JobStatus;
use crate::services::queue::QueuedJob;
use crate::services::{catalog, export, validation};

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiError {
            error: message.into(),
        }),
    )
}

fn internal_error(error: impl std::fmt::Display) -> (StatusCode, Json<ApiError>) {
    tracing::error!(error = %error, "Request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: "internal server error".to_string(),
        }),
    )
}

/// POST /api/v1/descriptions — submit a description generation job.
pub async fn submit_generation(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), (StatusCode, Json<ApiError>)> {
    request
        .validate()
        .map_err(|report| bad_request(report.to_string()))?;

    // Prompt assembly tolerates empty attributes, but generating without a
    // category produces useless text, so it is gated here.
    if request.attributes.product_category.trim().is_empty() {
        return Err(bad_request(
            "product_category is required before generating a description",
        ));
    }

    let attributes_json =
        serde_json::to_value(&request.attributes).map_err(internal_error)?;

    let job = crate::db::queries::create_job(
        &state.db,
        &request.description_code,
        &request.language_code,
        &attributes_json,
    )
    .await
    .map_err(internal_error)?;

    let queued = QueuedJob {
        job_id: job.id,
        attributes: request.attributes,
        description_code: request.description_code,
        language_code: request.language_code,
        maintenance_type: request.maintenance_type,
        sequence: request.sequence,
    };

    state.queue.enqueue(&queued).await.map_err(internal_error)?;

    metrics::counter!("generation_jobs_total").increment(1);
    tracing::info!(
        job_id = %job.id,
        description_code = %queued.description_code,
        "Generation job submitted"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(GenerateResponse {
            job_id: job.id,
            status: "pending".to_string(),
            message: "Description generation job submitted".to_string(),
        }),
    ))
}

/// GET /api/v1/descriptions/{job_id} — check generation job status.
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobStatusResponse>, (StatusCode, Json<ApiError>)> {
    let job = crate::db::queries::get_job(&state.db, job_id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError {
                    error: format!("job {job_id} not found"),
                }),
            )
        })?;

    Ok(Json(JobStatusResponse {
        job_id: job.id,
        status: job_status_str(&job.status).to_string(),
        result: job.result,
        error: job.error,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ListJobsParams {
    #[serde(default = "default_list_limit")]
    pub limit: i64,
}

fn default_list_limit() -> i64 {
    50
}

/// GET /api/v1/descriptions — list recent generation jobs.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListJobsParams>,
) -> Result<Json<Vec<JobStatusResponse>>, (StatusCode, Json<ApiError>)> {
    let limit = params.limit.clamp(1, 200);
    let jobs = crate::db::queries::list_recent_jobs(&state.db, limit)
        .await
        .map_err(internal_error)?;

    Ok(Json(
        jobs.into_iter()
            .map(|job| JobStatusResponse {
                job_id: job.id,
                status: job_status_str(&job.status).to_string(),
                result: job.result,
                error: job.error,
            })
            .collect(),
    ))
}

/// GET /api/v1/description-codes — the PIES description-code catalog.
pub async fn list_description_codes() -> Json<Vec<CatalogEntry>> {
    Json(
        DescriptionCode::iter()
            .map(|code| {
                let key = code.to_string();
                CatalogEntry {
                    purpose: catalog::purpose(&key).to_string(),
                    max_length: catalog::max_length(&key),
                    code: key,
                }
            })
            .collect(),
    )
}

/// POST /api/v1/validate — re-validate description text after an edit.
pub async fn validate_description(
    Json(request): Json<ValidateRequest>,
) -> Result<Json<crate::models::description::ValidationResult>, (StatusCode, Json<ApiError>)> {
    request
        .validate()
        .map_err(|report| bad_request(report.to_string()))?;

    Ok(Json(validation::validate(
        &request.description_code,
        &request.text,
    )))
}

/// POST /api/v1/export/csv — render descriptions as PIES CSV.
pub async fn export_csv(Json(descriptions): Json<Vec<GeneratedDescription>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        export::to_csv(&descriptions),
    )
}

/// POST /api/v1/export/xml — render descriptions as the PIES XML fragment.
pub async fn export_xml(Json(descriptions): Json<Vec<GeneratedDescription>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        export::to_xml(&descriptions),
    )
}

fn job_status_str(status: &JobStatus) -> &'static str {
    match status {
        JobStatus::Pending => "pending",
        JobStatus::Processing => "processing",
        JobStatus::Completed => "completed",
        JobStatus::Failed => "failed",
    }
}
