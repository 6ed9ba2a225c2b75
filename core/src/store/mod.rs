mod cart;
mod course;
mod enrollment;
mod quiz;
mod quiz_score;
mod review;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use deadpool_postgres::{Config, Pool, PoolConfig, Runtime};
use thiserror::Error;
use tokio_postgres::NoTls;
use tracing::info;

use crate::config::Settings;

pub use cart::CartStore;
pub use course::CourseStore;
pub use enrollment::EnrollmentStore;
pub use quiz::QuizStore;
pub use quiz_score::QuizScoreStore;
pub use review::{NewReviewOutcome, ReviewStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create database pool: {0}")]
    CreatePool(#[from] deadpool_postgres::CreatePoolError),
    #[error("failed to get a database connection: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),
    #[error("database query failed: {0}")]
    Query(#[from] tokio_postgres::Error),
    #[error("unexpected row count: expected {expected}, got {actual}")]
    RowCount { expected: u64, actual: u64 },
}

/// Inserts one enrollment per call. Implementations do not deduplicate.
#[async_trait]
pub trait EnrollmentWriter: Send + Sync + 'static {
    async fn enroll(&self, user_id: i64, course_id: i64) -> Result<(), StoreError>;
}

/// Removes every cart line item of a user and reports how many were removed.
#[async_trait]
pub trait CartClearer: Send + Sync + 'static {
    async fn clear_cart(&self, user_id: i64) -> Result<u64, StoreError>;
}

pub async fn connect(settings: &Settings) -> Result<Pool, StoreError> {
    let mut db_config = Config::new();
    db_config.host = Some(settings.db_host.clone());
    db_config.port = Some(settings.db_port);
    db_config.dbname = Some(settings.db_name.clone());
    db_config.user = Some(settings.db_user.clone());
    db_config.password = Some(settings.db_password.clone());
    db_config.pool = Some(PoolConfig::new(settings.db_pool_size));

    let pool = db_config.create_pool(Some(Runtime::Tokio1), NoTls)?;

    _ = pool.get().await?;
    info!("Connected to Postgres at {}:{}/{}", settings.db_host, settings.db_port, settings.db_name);

    Ok(pool)
}
