use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        get_affirmation_handler, get_all_seasons_handler, get_preference_handler,
        get_season_handler, health_handler, save_preference_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/season", get(get_season_handler))
        .route("/api/seasons/all", get(get_all_seasons_handler))
        .route("/api/affirmation", get(get_affirmation_handler))
        .route(
            "/api/notifications/preferences",
            post(save_preference_handler),
        )
        .route(
            "/api/notifications/preferences/{device_id}",
            get(get_preference_handler),
        )
        .with_state(state)
}
