use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::job::{GenerationJob, JobStatus};

fn status_str(status: &JobStatus) -> &'static str {
    match status {
        JobStatus::Pending => "pending",
        JobStatus::Processing => "processing",
        JobStatus::Completed => "completed",
        JobStatus::Failed => "failed",
    }
}

fn parse_status(status: &str) -> JobStatus {
    match status {
        "processing" => JobStatus::Processing,
        "completed" => JobStatus::Completed,
        "failed" => JobStatus::Failed,
        _ => JobStatus::Pending,
    }
}

fn row_to_job(row: &sqlx::postgres::PgRow) -> Result<GenerationJob, sqlx::Error> {
    let status: String = row.try_get("status")?;
    Ok(GenerationJob {
        id: row.try_get("id")?,
        status: parse_status(&status),
        description_code: row.try_get("description_code")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        result: row.try_get("result")?,
        error: row.try_get("error")?,
        retry_count: row.try_get("retry_count")?,
    })
}

/// Insert a new generation job
pub async fn create_job(
    pool: &PgPool,
    description_code: &str,
    language_code: &str,
    attributes: &serde_json::Value,
) -> Result<GenerationJob, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO generation_jobs (status, description_code, language_code, attributes)
        VALUES ('pending', $1, $2, $3)
        RETURNING id, status, description_code, created_at, updated_at, retry_count, error, result
        "#,
    )
    .bind(description_code)
    .bind(language_code)
    .bind(attributes)
    .fetch_one(pool)
    .await?;

    row_to_job(&row)
}

/// Get a job by ID
pub async fn get_job(pool: &PgPool, job_id: Uuid) -> Result<Option<GenerationJob>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, status, description_code, created_at, updated_at, retry_count, error, result
        FROM generation_jobs
        WHERE id = $1
        "#,
    )
    .bind(job_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_job).transpose()
}

/// List the most recent jobs, newest first
pub async fn list_recent_jobs(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<GenerationJob>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, status, description_code, created_at, updated_at, retry_count, error, result
        FROM generation_jobs
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_job).collect()
}

/// Update job status
pub async fn update_job_status(
    pool: &PgPool,
    job_id: Uuid,
    status: JobStatus,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE generation_jobs
        SET status = $1,
            updated_at = NOW(),
            processing_started_at = CASE WHEN $1 = 'processing' THEN NOW() ELSE processing_started_at END,
            processing_completed_at = CASE WHEN $1 IN ('completed', 'failed') THEN NOW() ELSE processing_completed_at END
        WHERE id = $2
        "#,
    )
    .bind(status_str(&status))
    .bind(job_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Update job with results
pub async fn update_job_result(
    pool: &PgPool,
    job_id: Uuid,
    status: JobStatus,
    result: Option<serde_json::Value>,
    error: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE generation_jobs
        SET status = $1,
            result = $2,
            error = $3,
            updated_at = NOW(),
            processing_completed_at = NOW()
        WHERE id = $4
        "#,
    )
    .bind(status_str(&status))
    .bind(result)
    .bind(error)
    .bind(job_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Increment retry count
pub async fn increment_retry_count(pool: &PgPool, job_id: Uuid) -> Result<i32, sqlx::Error> {
    let row = sqlx::query(
        r#"
        UPDATE generation_jobs
        SET retry_count = retry_count + 1,
            updated_at = NOW()
        WHERE id = $1
        RETURNING retry_count
        "#,
    )
    .bind(job_id)
    .fetch_one(pool)
    .await?;

    row.try_get("retry_count")
}
