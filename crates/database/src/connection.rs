use crate::error::DbError;
use crate::memory::MemoryRollStore;
use crate::repository::DbRepository;
use crate::store::RollStore;
use configuration::{Database, StorageBackend};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool size and acquire timeout come from the `[database]` settings;
/// the acquire timeout bounds how long any single store call may wait.
pub async fn connect(settings: &Database) -> Result<PgPool, DbError> {
    let database_url = settings
        .url
        .as_deref()
        .ok_or_else(|| DbError::ConnectionConfigError("DATABASE_URL must be set.".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// A utility function to run database migrations automatically.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Builds the `RollStore` selected by the settings.
pub async fn open_store(settings: &Database) -> Result<Arc<dyn RollStore>, DbError> {
    match settings.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using the in-memory roll store; data will not survive a restart.");
            Ok(Arc::new(MemoryRollStore::new()))
        }
        StorageBackend::Postgres => {
            let pool = connect(settings).await?;
            if settings.run_migrations {
                run_migrations(&pool).await?;
            }
            tracing::info!("Connected to the PostgreSQL roll store.");
            Ok(Arc::new(DbRepository::new(pool)))
        }
    }
}
