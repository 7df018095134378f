use redis::AsyncCommands;
use sqlx::PgPool;
use std::collections::HashMap;

use crate::{
    errors::AppError,
    models::{NotificationPreference, redis::RedisKey},
    state::RedisClient,
};

pub async fn get_preference(
    device_id: &str,
    postgres: PgPool,
) -> Result<Option<NotificationPreference>, AppError> {
    sqlx::query_as::<_, NotificationPreference>(
        "SELECT device_id, enabled, frequency, updated_at
			FROM notification_prefs
			WHERE device_id = $1",
    )
    .bind(device_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| {
        AppError::DatabaseError(format!("Failed to fetch notification preference: {}", e))
    })
}

pub async fn get_preference_redis(
    device_id: &str,
    namespace: &str,
    redis: RedisClient,
) -> Result<Option<NotificationPreference>, AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let key = RedisKey::notification_pref(namespace, device_id);

    let data: HashMap<String, String> = conn
        .hgetall(&key)
        .await
        .map_err(AppError::RedisCommandError)?;

    NotificationPreference::from_redis_hash(device_id, data)
}
