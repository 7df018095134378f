pub mod config;
pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod seasons;
pub mod state;

use axum::{Router, http::StatusCode, middleware as axum_middleware};
use config::Config;
use errors::AppError;
use middleware::{
    cors_layer, create_global_rate_limiter, rate_limit_middleware, spawn_rate_limiter_cleanup,
};
use seasons::SeasonResolver;
use state::AppState;
use std::{net::SocketAddr, time::Duration};
use tower_http::trace::TraceLayer;

/// Routes plus request tracing; rate limiting and CORS are added by `start_server`.
pub fn create_app(state: AppState) -> Router {
    http::create_http_routes(state)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let notifications = db::connect_store(&config.storage).await?;
    let state = AppState::new(SeasonResolver::default(), notifications);

    let global_rate_limiter = create_global_rate_limiter(config.rate_limit_per_minute);
    spawn_rate_limiter_cleanup(global_rate_limiter.clone(), Duration::from_secs(60));

    let app = create_app(state)
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer(config.allowed_origins.as_deref()));

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| AppError::ServerError(format!("Failed to bind port {port}: {e}")))?;

    tracing::info!("Season tracker API listening on port {port}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::ServerError(e.to_string()))
}
