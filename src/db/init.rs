use sqlx::PgPool;

use crate::errors::AppError;

pub async fn initialize_schema(postgres: &PgPool) -> Result<(), AppError> {
    tracing::info!("Ensuring notification_prefs table exists...");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS notification_prefs (
            device_id TEXT PRIMARY KEY,
            enabled BOOLEAN NOT NULL DEFAULT FALSE,
            frequency TEXT NOT NULL DEFAULT 'daily',
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    )
    .execute(postgres)
    .await
    .map_err(|e| {
        AppError::DatabaseError(format!("Failed to create notification_prefs: {}", e))
    })?;

    Ok(())
}
