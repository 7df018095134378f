use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::Response,
};
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc, time::Duration};
use tower_http::cors::{Any, CorsLayer};

pub type IpRateLimiter = Arc<RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>>;

pub fn create_global_rate_limiter(per_minute: NonZeroU32) -> IpRateLimiter {
    Arc::new(RateLimiter::keyed(Quota::per_minute(per_minute)))
}

// Drops per-IP entries whose quota has fully replenished
pub fn prune_rate_limiter(rate_limiter: &IpRateLimiter) {
    rate_limiter.retain_recent();
    rate_limiter.shrink_to_fit();
}

pub fn spawn_rate_limiter_cleanup(
    rate_limiter: IpRateLimiter,
    period: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            prune_rate_limiter(&rate_limiter);
            tracing::debug!("Rate limiter tracking {} IPs", rate_limiter.len());
        }
    })
}

// IP-based rate limiting middleware function
pub async fn rate_limit_middleware(
    rate_limiter: IpRateLimiter,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract the client IP address
    let client_ip =
        if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
            addr.ip().to_string()
        } else {
            // No connect info outside `into_make_service_with_connect_info`
            "unknown".to_string()
        };

    match rate_limiter.check_key(&client_ip) {
        Ok(_) => Ok(next.run(request).await),
        Err(_) => {
            // Rate limit exceeded for this IP
            tracing::warn!("Rate limit exceeded for IP: {}", client_ip);
            Err(StatusCode::TOO_MANY_REQUESTS)
        }
    }
}

/// Credentials are only allowed when the origins are listed explicitly.
pub fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));

    let origins = allowed_origins
        .unwrap_or_default()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect::<Vec<_>>();

    if origins.is_empty() {
        tracing::info!("CORS allowing any origin");
        return layer.allow_origin(Any).allow_headers(Any);
    }

    tracing::info!("CORS allowed origins: {:?}", origins);

    layer
        .allow_origin(origins)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
