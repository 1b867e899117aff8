use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::description::MaintenanceType;
use crate::models::part::ProductAttributes;

const QUEUE_KEY: &str = "pies_desc:jobs";
const PROCESSING_KEY: &str = "pies_desc:processing";

/// Job payload serialized into Redis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedJob {
    pub job_id: Uuid,
    pub attributes: ProductAttributes,
    pub description_code: String,
    pub language_code: String,
    pub maintenance_type: MaintenanceType,
    pub sequence: u16,
}

/// Redis-backed job queue. Dequeued jobs move to a processing list so a
/// crashed worker leaves evidence instead of losing the job.
pub struct JobQueue {
    client: redis::Client,
}

impl JobQueue {
    pub fn new(redis_url: &str) -> Result<Self, QueueError> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self { client })
    }

    async fn conn(&self) -> Result<MultiplexedConnection, QueueError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }

    /// Enqueue a generation job.
    pub async fn enqueue(&self, job: &QueuedJob) -> Result<(), QueueError> {
        let payload = serde_json::to_string(job)?;
        self.conn().await?.lpush::<_, _, ()>(QUEUE_KEY, &payload).await?;
        Ok(())
    }

    /// Dequeue a job for processing (pop with move to the processing list).
    pub async fn dequeue(&self) -> Result<Option<QueuedJob>, QueueError> {
        let payload: Option<String> = self
            .conn()
            .await?
            .rpoplpush(QUEUE_KEY, PROCESSING_KEY)
            .await?;

        payload
            .map(|p| serde_json::from_str(&p).map_err(QueueError::Serialize))
            .transpose()
    }

    /// Mark a job as complete (remove from the processing list).
    pub async fn complete(&self, job: &QueuedJob) -> Result<(), QueueError> {
        let payload = serde_json::to_string(job)?;
        self.conn()
            .await?
            .lrem::<_, _, ()>(PROCESSING_KEY, 1, &payload)
            .await?;
        Ok(())
    }

    /// Get the current queue depth (pending jobs).
    pub async fn queue_depth(&self) -> Result<u64, QueueError> {
        Ok(self.conn().await?.llen(QUEUE_KEY).await?)
    }

    /// Check Redis connectivity (for health checks).
    pub async fn health_check(&self) -> Result<(), QueueError> {
        redis::cmd("PING")
            .query_async::<String>(&mut self.conn().await?)
            .await?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
