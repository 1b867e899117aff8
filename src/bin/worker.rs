use pies_desc_genie::{
    app_state::AppState,
    config::AppConfig,
    db::{self, queries},
    models::description::GeneratedDescription,
    models::generation::DescriptionOutcome,
    models::job::JobStatus,
    services::{llm::LlmBackend, pipeline, queue::JobQueue},
};
use std::time::Duration;
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

const MAX_RETRIES: i32 = 3;
const POLL_INTERVAL_MS: u64 = 1000; // 1 second

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting description generation worker");

    // Load configuration
    let config = AppConfig::from_env().expect("Failed to load configuration");
    let shorten_max_retries = config.shorten_max_retries;

    // Initialize database
    tracing::info!("Connecting to PostgreSQL");
    let db_pool = db::init_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Initialize services
    tracing::info!("Initializing services");
    let queue = JobQueue::new(&config.redis_url).expect("Failed to initialize job queue");

    let llm = LlmBackend::from_config(&config).expect("Failed to initialize generation backend");
    tracing::info!(model = llm.model_name(), "Generation backend ready");

    let state = AppState::new(db_pool, queue, llm);

    tracing::info!("Worker ready, starting job processing loop");

    // Main processing loop
    loop {
        match process_next_job(&state, shorten_max_retries).await {
            Ok(true) => {
                // Job processed successfully, continue immediately
                tracing::debug!("Job processed, checking for next job");
            }
            Ok(false) => {
                // No job available, sleep before next poll
                tracing::trace!("No jobs available, sleeping");
                sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error processing job, will retry");
                sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
            }
        }

        if let Ok(depth) = state.queue.queue_depth().await {
            metrics::gauge!("generation_queue_depth").set(depth as f64);
        }
    }
}

/// Process the next job from the queue.
/// Returns Ok(true) if a job was processed, Ok(false) if no job available.
async fn process_next_job(
    state: &AppState,
    shorten_max_retries: u32,
) -> Result<bool, Box<dyn std::error::Error>> {
    // Dequeue next job
    let job = match state.queue.dequeue().await? {
        Some(j) => j,
        None => return Ok(false), // No job available
    };

    tracing::info!(
        job_id = %job.job_id,
        description_code = %job.description_code,
        language_code = %job.language_code,
        "Processing generation job"
    );

    // Update job status to processing
    if let Err(e) = queries::update_job_status(&state.db, job.job_id, JobStatus::Processing).await
    {
        tracing::error!(job_id = %job.job_id, error = %e, "Failed to update job status");
        return Err(e.into());
    }

    // Process the job
    match process_job_inner(state, &job, shorten_max_retries).await {
        Ok(outcome) => {
            // Store results in database
            let result_json = serde_json::to_value(&outcome)?;
            queries::update_job_result(
                &state.db,
                job.job_id,
                JobStatus::Completed,
                Some(result_json),
                None,
            )
            .await?;

            // Mark job as complete in queue
            state.queue.complete(&job).await?;

            metrics::counter!("generation_jobs_completed").increment(1);
            tracing::info!(
                job_id = %job.job_id,
                is_valid = outcome.validation.is_valid,
                chars = outcome.description.description_text.chars().count(),
                "Job completed successfully"
            );

            Ok(true)
        }
        Err(e) => {
            tracing::error!(job_id = %job.job_id, error = %e, "Job processing failed");

            // Check retry count
            let retry_count = queries::increment_retry_count(&state.db, job.job_id).await?;

            if retry_count >= MAX_RETRIES {
                // Max retries exceeded, mark as failed
                queries::update_job_result(
                    &state.db,
                    job.job_id,
                    JobStatus::Failed,
                    None,
                    Some(&format!(
                        "Processing failed after {} retries: {}",
                        MAX_RETRIES, e
                    )),
                )
                .await?;

                state.queue.complete(&job).await?;

                metrics::counter!("generation_jobs_failed").increment(1);
                tracing::warn!(
                    job_id = %job.job_id,
                    retry_count = retry_count,
                    "Job failed after max retries"
                );
            } else {
                // Re-queue for retry
                state.queue.enqueue(&job).await?;
                state.queue.complete(&job).await?;

                queries::update_job_status(&state.db, job.job_id, JobStatus::Pending).await?;

                tracing::info!(
                    job_id = %job.job_id,
                    retry_count = retry_count,
                    "Job re-queued for retry"
                );
            }

            Ok(true)
        }
    }
}

/// Inner job processing logic.
async fn process_job_inner(
    state: &AppState,
    job: &pies_desc_genie::services::queue::QueuedJob,
    shorten_max_retries: u32,
) -> Result<DescriptionOutcome, Box<dyn std::error::Error>> {
    tracing::debug!(job_id = %job.job_id, "Running generation pipeline");
    let start = std::time::Instant::now();

    let result = pipeline::generate_compliant_description(
        state.llm.as_ref(),
        &job.attributes,
        &job.description_code,
        &job.language_code,
        shorten_max_retries,
    )
    .await?;

    let duration = start.elapsed();
    metrics::histogram!("description_generation_seconds").record(duration.as_secs_f64());

    tracing::info!(
        job_id = %job.job_id,
        generation_duration_ms = duration.as_millis(),
        is_valid = result.validation.is_valid,
        issues_count = result.validation.issues.len(),
        "Generation pipeline complete"
    );

    Ok(DescriptionOutcome {
        description: GeneratedDescription {
            language_code: job.language_code.clone(),
            maintenance_type: job.maintenance_type,
            description_code: job.description_code.clone(),
            sequence: job.sequence,
            description_text: result.description_text,
        },
        validation: result.validation,
    })
}
