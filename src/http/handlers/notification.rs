use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;

use crate::{
    errors::AppError,
    models::{
        NotificationPreference,
        notification::{NotificationPreferencePayload, SavedPreferenceResponse},
    },
    state::AppState,
};

fn validate_device_id(device_id: &str) -> Result<(), (StatusCode, String)> {
    if device_id.trim().is_empty() {
        tracing::warn!("Rejected notification preference request with blank device_id");
        return Err(AppError::BadRequest("device_id must not be empty".into()).to_response());
    }
    Ok(())
}

pub async fn save_preference_handler(
    State(state): State<AppState>,
    Json(payload): Json<NotificationPreferencePayload>,
) -> Result<Json<SavedPreferenceResponse>, (StatusCode, String)> {
    validate_device_id(&payload.device_id)?;

    let pref = payload.into_preference(Utc::now());

    state
        .notifications
        .upsert_preference(&pref)
        .await
        .map_err(|e| {
            tracing::error!("Error saving preference for {}: {}", pref.device_id, e);
            e.to_response()
        })?;

    tracing::info!(
        "Notification preference saved for {} (enabled: {}, frequency: {})",
        pref.device_id,
        pref.enabled,
        pref.frequency
    );

    Ok(Json(SavedPreferenceResponse {
        status: "saved".into(),
        device_id: pref.device_id,
    }))
}

pub async fn get_preference_handler(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<Json<NotificationPreference>, (StatusCode, String)> {
    validate_device_id(&device_id)?;

    let pref = state
        .notifications
        .get_preference(&device_id)
        .await
        .map_err(|e| {
            tracing::error!("Error retrieving preference for {}: {}", device_id, e);
            e.to_response()
        })?;

    Ok(Json(pref.unwrap_or_else(|| {
        tracing::debug!("No stored preference for {}, returning default", device_id);
        NotificationPreference::default_for(&device_id)
    })))
}
