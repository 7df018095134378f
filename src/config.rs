use std::num::NonZeroU32;

use crate::errors::AppError;

const DEFAULT_PORT: u16 = 8001;
const DEFAULT_NAMESPACE: &str = "season_tracker";
const DEFAULT_RATE_LIMIT_PER_MINUTE: NonZeroU32 = NonZeroU32::new(1000).unwrap();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres {
        url: String,
        database: Option<String>,
    },
    Redis {
        url: String,
        namespace: String,
    },
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageBackend,
    pub port: u16,
    /// `None` allows any origin.
    pub allowed_origins: Option<Vec<String>>,
    pub rate_limit_per_minute: NonZeroU32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::EnvError("DATABASE_URL must be set".into()))?;
        let db_name = lookup("DB_NAME").filter(|v| !v.trim().is_empty());

        let storage = parse_storage(database_url.trim(), db_name)?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::EnvError(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS").and_then(|raw| {
            let origins = raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty() && s != "*")
                .collect::<Vec<_>>();
            (!origins.is_empty()).then_some(origins)
        });

        let rate_limit_per_minute = match lookup("RATE_LIMIT_PER_MINUTE") {
            Some(raw) => raw
                .trim()
                .parse::<NonZeroU32>()
                .map_err(|e| {
                    AppError::EnvError(format!("Invalid RATE_LIMIT_PER_MINUTE '{}': {}", raw, e))
                })?,
            None => DEFAULT_RATE_LIMIT_PER_MINUTE,
        };

        Ok(Self {
            storage,
            port,
            allowed_origins,
            rate_limit_per_minute,
        })
    }
}

fn parse_storage(url: &str, db_name: Option<String>) -> Result<StorageBackend, AppError> {
    let scheme = url
        .split_once("://")
        .map(|(scheme, _)| scheme.to_lowercase())
        .ok_or_else(|| AppError::EnvError(format!("DATABASE_URL has no scheme: {}", url)))?;

    match scheme.as_str() {
        "postgres" | "postgresql" => Ok(StorageBackend::Postgres {
            url: url.to_string(),
            database: db_name,
        }),
        "redis" | "rediss" => Ok(StorageBackend::Redis {
            url: url.to_string(),
            namespace: db_name.unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
        }),
        "memory" => Ok(StorageBackend::Memory),
        other => Err(AppError::EnvError(format!(
            "Unsupported DATABASE_URL scheme '{}'",
            other
        ))),
    }
}
