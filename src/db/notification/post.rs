use chrono::Utc;
use redis::AsyncCommands;
use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{NotificationPreference, redis::RedisKey},
    state::RedisClient,
};

pub async fn upsert_preference(
    pref: &NotificationPreference,
    postgres: PgPool,
) -> Result<(), AppError> {
    let updated_at = pref.updated_at.unwrap_or_else(Utc::now);

    sqlx::query(
        "INSERT INTO notification_prefs (device_id, enabled, frequency, updated_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (device_id) DO UPDATE
        SET enabled = EXCLUDED.enabled,
            frequency = EXCLUDED.frequency,
            updated_at = EXCLUDED.updated_at",
    )
    .bind(&pref.device_id)
    .bind(pref.enabled)
    .bind(&pref.frequency)
    .bind(updated_at)
    .execute(&postgres)
    .await
    .map_err(|e| {
        AppError::DatabaseError(format!("Failed to save notification preference: {}", e))
    })?;

    tracing::info!("Saved notification preference for device {}", pref.device_id);

    Ok(())
}

pub async fn upsert_preference_redis(
    pref: &NotificationPreference,
    namespace: &str,
    redis: RedisClient,
) -> Result<(), AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let key = RedisKey::notification_pref(namespace, &pref.device_id);
    let fields = pref.to_redis_fields();

    let _: () = conn
        .hset_multiple(&key, &fields)
        .await
        .map_err(AppError::RedisCommandError)?;

    tracing::info!("Saved notification preference for device {}", pref.device_id);

    Ok(())
}
