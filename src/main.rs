mod app_state;
mod config;
mod db;
mod models;
mod routes;
mod services;

use axum::response::Html;
use axum::{routing::get, routing::post, Router};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use app_state::AppState;
use config::AppConfig;
use services::{llm::LlmBackend, queue::JobQueue};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing pies-desc-genie server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_histogram!(
        "description_generation_seconds",
        "Time to process a description generation job"
    );
    metrics::describe_counter!("generation_jobs_total", "Total generation jobs submitted");
    metrics::describe_counter!(
        "generation_jobs_completed",
        "Total generation jobs completed"
    );
    metrics::describe_counter!("generation_jobs_failed", "Total generation jobs that failed");
    metrics::describe_counter!(
        "description_shorten_attempts_total",
        "Total shortening rewrites requested from the backend"
    );
    metrics::describe_gauge!(
        "generation_queue_depth",
        "Current number of pending jobs in the queue"
    );

    // Initialize database connection pool
    tracing::info!("Connecting to PostgreSQL database");
    let db_pool = db::init_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Run database migrations
    tracing::info!("Running database migrations");
    db::run_migrations(&db_pool)
        .await
        .expect("Failed to run database migrations");

    // Initialize Redis job queue
    tracing::info!("Connecting to Redis job queue");
    let queue = JobQueue::new(&config.redis_url).expect("Failed to initialize job queue");

    // Initialize generation backend
    let llm = LlmBackend::from_config(&config).expect("Failed to initialize generation backend");
    tracing::info!(model = llm.model_name(), "Generation backend ready");

    // Create shared application state
    let state = AppState::new(db_pool, queue, llm);

    // Build API routes
    let app = Router::new()
        // Static UI (embedded at compile time)
        .route("/", get(|| async { Html(include_str!("../static/index.html")) }))
        // API endpoints
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/v1/descriptions",
            post(routes::descriptions::submit_generation).get(routes::descriptions::list_jobs),
        )
        .route(
            "/api/v1/descriptions/{job_id}",
            get(routes::descriptions::get_job_status),
        )
        .route(
            "/api/v1/description-codes",
            get(routes::descriptions::list_description_codes),
        )
        .route(
            "/api/v1/validate",
            post(routes::descriptions::validate_description),
        )
        .route("/api/v1/export/csv", post(routes::descriptions::export_csv))
        .route("/api/v1/export/xml", post(routes::descriptions::export_xml))
        .route("/api/v1/parts", get(routes::parts::list_parts))
        .route("/api/v1/parts/{part_number}", get(routes::parts::get_part))
        .with_state(state)
        // Prometheus metrics endpoint (text exposition format)
        .route(
            "/metrics",
            get(move || async move { prometheus_handle.render() }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(1024 * 1024)); // 1 MB limit

    tracing::info!("Starting pies-desc-genie on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
