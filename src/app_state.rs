use sqlx::PgPool;
use std::sync::Arc;

use crate::services::{llm::LlmBackend, queue::JobQueue};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub queue: Arc<JobQueue>,
    pub llm: Arc<LlmBackend>,
}

impl AppState {
    pub fn new(db: PgPool, queue: JobQueue, llm: LlmBackend) -> Self {
        Self {
            db,
            queue: Arc::new(queue),
            llm: Arc::new(llm),
        }
    }
}
