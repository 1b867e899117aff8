use pies_desc_genie::{
    config::AppConfig,
    db::{self, part_queries, queries},
    models::description::MaintenanceType,
    models::job::JobStatus,
    models::part::ProductAttributes,
    services::queue::{JobQueue, QueuedJob},
};

/// Integration test: Full job lifecycle
///
/// This test verifies the complete integration:
/// 1. Database connection and schema
/// 2. Parts lookup
/// 3. Job queue (enqueue/dequeue)
/// 4. Database operations (create/read/update jobs)
///
/// Note: This requires a running PostgreSQL and Redis instance
/// configured via environment variables.
#[tokio::test]
#[ignore] // Run with: cargo test --test integration_test -- --ignored
async fn test_full_integration() {
    // Load config from environment
    let config = AppConfig::from_env().expect("Failed to load config");

    // Initialize database
    let db_pool = db::init_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    db::run_migrations(&db_pool)
        .await
        .expect("Failed to run migrations");

    // Initialize queue
    let queue = JobQueue::new(&config.redis_url).expect("Failed to initialize queue");

    // 1. Parts lookup (seeded by migrations)
    let parts = part_queries::list_parts(&db_pool, 100)
        .await
        .expect("Failed to list parts");
    assert!(!parts.is_empty(), "parts table should be seeded");

    let part = part_queries::get_part(&db_pool, &parts[0].part_number)
        .await
        .expect("Failed to fetch part")
        .expect("Seeded part not found");
    let attributes: ProductAttributes = part.into();

    // 2. Test database job creation
    let attributes_json = serde_json::to_value(&attributes).expect("serialize attributes");
    let job = queries::create_job(&db_pool, "FULL_DESC", "ENGL", &attributes_json)
        .await
        .expect("Failed to create job");

    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.description_code, "FULL_DESC");
    assert_eq!(job.retry_count, 0);

    // 3. Test job retrieval
    let retrieved_job = queries::get_job(&db_pool, job.id)
        .await
        .expect("Failed to get job")
        .expect("Job not found");

    assert_eq!(retrieved_job.id, job.id);
    assert_eq!(retrieved_job.status, JobStatus::Pending);

    // 4. Test job status update
    queries::update_job_status(&db_pool, job.id, JobStatus::Processing)
        .await
        .expect("Failed to update status");

    let updated_job = queries::get_job(&db_pool, job.id)
        .await
        .expect("Failed to get job")
        .expect("Job not found");

    assert_eq!(updated_job.status, JobStatus::Processing);

    // 5. Test queue operations
    let queued_job = QueuedJob {
        job_id: job.id,
        attributes,
        description_code: "FULL_DESC".to_string(),
        language_code: "ENGL".to_string(),
        maintenance_type: MaintenanceType::Add,
        sequence: 1,
    };

    queue.enqueue(&queued_job).await.expect("Failed to enqueue");

    let depth = queue.queue_depth().await.expect("Failed to read depth");
    assert!(depth >= 1);

    let dequeued = queue
        .dequeue()
        .await
        .expect("Failed to dequeue")
        .expect("No job in queue");

    assert_eq!(dequeued.job_id, job.id);
    assert_eq!(dequeued.description_code, "FULL_DESC");

    // 6. Test job completion
    let result = serde_json::json!({
        "description": {
            "language_code": "ENGL",
            "maintenance_type": "ADD",
            "description_code": "FULL_DESC",
            "sequence": 1,
            "description_text": "Heated oxygen sensor with OE connector"
        },
        "validation": { "is_valid": true, "issues": [] }
    });

    queries::update_job_result(&db_pool, job.id, JobStatus::Completed, Some(result), None)
        .await
        .expect("Failed to update result");

    let final_job = queries::get_job(&db_pool, job.id)
        .await
        .expect("Failed to get job")
        .expect("Job not found");

    assert_eq!(final_job.status, JobStatus::Completed);
    assert!(final_job.result.is_some());

    // Cleanup
    queue
        .complete(&dequeued)
        .await
        .expect("Failed to complete job in queue");

    println!("All integration tests passed!");
}

/// Test retry count bookkeeping against a live database.
#[tokio::test]
#[ignore]
async fn test_retry_count_increment() {
    let config = AppConfig::from_env().expect("Failed to load config");
    let db_pool = db::init_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");
    db::run_migrations(&db_pool)
        .await
        .expect("Failed to run migrations");

    let attributes_json = serde_json::json!({ "product_category": "Ignition Coil" });
    let job = queries::create_job(&db_pool, "SHORT_DESC", "ENGL", &attributes_json)
        .await
        .expect("Failed to create job");

    let first = queries::increment_retry_count(&db_pool, job.id)
        .await
        .expect("increment failed");
    let second = queries::increment_retry_count(&db_pool, job.id)
        .await
        .expect("increment failed");

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}
