pub mod init;
pub mod notification;
pub mod store;

use async_trait::async_trait;
use bb8::Pool;
use bb8_redis::RedisConnectionManager;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::{str::FromStr, sync::Arc};

use crate::{config::StorageBackend, errors::AppError, models::NotificationPreference};

pub use store::{MemoryNotificationStore, PgNotificationStore, RedisNotificationStore};

/// Notification preferences keyed by device id.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn get_preference(
        &self,
        device_id: &str,
    ) -> Result<Option<NotificationPreference>, AppError>;

    /// Creates the preference or replaces the one stored under the same device id.
    async fn upsert_preference(&self, pref: &NotificationPreference) -> Result<(), AppError>;
}

pub async fn connect_store(
    backend: &StorageBackend,
) -> Result<Arc<dyn NotificationStore>, AppError> {
    match backend {
        StorageBackend::Postgres { url, database } => {
            let mut options = PgConnectOptions::from_str(url)
                .map_err(|e| AppError::EnvError(format!("Invalid DATABASE_URL: {}", e)))?;
            if let Some(database) = database {
                options = options.database(database);
            }

            let postgres = PgPoolOptions::new()
                .max_connections(10)
                .connect_with(options)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {}", e)))?;

            init::initialize_schema(&postgres).await?;
            tracing::info!("Using PostgreSQL notification store");

            Ok(Arc::new(PgNotificationStore::new(postgres)))
        }
        StorageBackend::Redis { url, namespace } => {
            let manager = RedisConnectionManager::new(url.as_str())?;
            let redis = Pool::builder().build(manager).await?;
            tracing::info!("Using Redis notification store (namespace: {})", namespace);

            Ok(Arc::new(RedisNotificationStore::new(redis, namespace.clone())))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory notification store; preferences are not persisted");
            Ok(Arc::new(MemoryNotificationStore::new()))
        }
    }
}
