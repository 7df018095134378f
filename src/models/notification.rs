use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

use crate::errors::AppError;

pub const DEFAULT_FREQUENCY: &str = "daily";

fn default_frequency() -> String {
    DEFAULT_FREQUENCY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct NotificationPreference {
    pub device_id: String,
    pub enabled: bool,
    pub frequency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl NotificationPreference {
    /// What a device gets before it has saved anything.
    pub fn default_for(device_id: &str) -> Self {
        Self {
            device_id: device_id.to_string(),
            enabled: false,
            frequency: default_frequency(),
            updated_at: None,
        }
    }

    /// Hash fields written to Redis. A missing `updated_at` is stamped with the current time.
    pub fn to_redis_fields(&self) -> Vec<(&'static str, String)> {
        let updated_at = self.updated_at.unwrap_or_else(Utc::now);
        vec![
            ("device_id", self.device_id.clone()),
            ("enabled", self.enabled.to_string()),
            ("frequency", self.frequency.clone()),
            ("updated_at", updated_at.to_rfc3339()),
        ]
    }

    /// Rebuilds a preference from `HGETALL` output; an empty hash means nothing is stored.
    pub fn from_redis_hash(
        device_id: &str,
        data: HashMap<String, String>,
    ) -> Result<Option<Self>, AppError> {
        if data.is_empty() {
            return Ok(None);
        }

        let enabled = match data.get("enabled").map(String::as_str) {
            Some("true") | Some("1") => true,
            Some("false") | Some("0") | None => false,
            Some(other) => {
                return Err(AppError::Deserialization(format!(
                    "Invalid enabled flag '{}' stored for device {}",
                    other, device_id
                )));
            }
        };

        let updated_at = data
            .get("updated_at")
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| {
                        AppError::Deserialization(format!("Invalid updated_at '{}': {}", raw, e))
                    })
            })
            .transpose()?;

        Ok(Some(Self {
            device_id: device_id.to_string(),
            enabled,
            frequency: data
                .get("frequency")
                .cloned()
                .unwrap_or_else(default_frequency),
            updated_at,
        }))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationPreferencePayload {
    pub device_id: String,
    pub enabled: bool,
    #[serde(default = "default_frequency")]
    pub frequency: String,
}

impl NotificationPreferencePayload {
    pub fn into_preference(self, updated_at: DateTime<Utc>) -> NotificationPreference {
        NotificationPreference {
            device_id: self.device_id,
            enabled: self.enabled,
            frequency: self.frequency,
            updated_at: Some(updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPreferenceResponse {
    pub status: String,
    pub device_id: String,
}
