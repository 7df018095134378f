use async_trait::async_trait;
use sqlx::PgPool;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

use crate::{
    db::{
        NotificationStore,
        notification::{get, post},
    },
    errors::AppError,
    models::NotificationPreference,
    state::RedisClient,
};

#[derive(Clone)]
pub struct PgNotificationStore {
    postgres: PgPool,
}

impl PgNotificationStore {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }
}

#[async_trait]
impl NotificationStore for PgNotificationStore {
    async fn get_preference(
        &self,
        device_id: &str,
    ) -> Result<Option<NotificationPreference>, AppError> {
        get::get_preference(device_id, self.postgres.clone()).await
    }

    async fn upsert_preference(&self, pref: &NotificationPreference) -> Result<(), AppError> {
        post::upsert_preference(pref, self.postgres.clone()).await
    }
}

#[derive(Clone)]
pub struct RedisNotificationStore {
    redis: RedisClient,
    namespace: String,
}

impl RedisNotificationStore {
    pub fn new(redis: RedisClient, namespace: impl Into<String>) -> Self {
        Self {
            redis,
            namespace: namespace.into(),
        }
    }
}

#[async_trait]
impl NotificationStore for RedisNotificationStore {
    async fn get_preference(
        &self,
        device_id: &str,
    ) -> Result<Option<NotificationPreference>, AppError> {
        get::get_preference_redis(device_id, &self.namespace, self.redis.clone()).await
    }

    async fn upsert_preference(&self, pref: &NotificationPreference) -> Result<(), AppError> {
        post::upsert_preference_redis(pref, &self.namespace, self.redis.clone()).await
    }
}

/// Process-local store. Contents are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryNotificationStore {
    prefs: Arc<Mutex<HashMap<String, NotificationPreference>>>,
}

impl MemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn get_preference(
        &self,
        device_id: &str,
    ) -> Result<Option<NotificationPreference>, AppError> {
        let prefs = self.prefs.lock().await;
        Ok(prefs.get(device_id).cloned())
    }

    async fn upsert_preference(&self, pref: &NotificationPreference) -> Result<(), AppError> {
        let mut prefs = self.prefs.lock().await;
        prefs.insert(pref.device_id.clone(), pref.clone());
        Ok(())
    }
}
