use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub mod part_queries;
pub mod queries;

/// Initialize the PostgreSQL connection pool. Generation traffic is light
/// (one worker, a handful of API calls), so the pool stays small.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .connect(database_url)
        .await
}

/// Apply schema migrations, including the example parts seed data.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))
}
