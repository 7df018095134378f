use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    models::season::{AffirmationResponse, Hemisphere, Season, SeasonDescriptor, SeasonSummary},
    state::AppState,
};

#[derive(Deserialize)]
pub struct HemisphereQuery {
    pub hemisphere: Option<String>,
}

impl HemisphereQuery {
    fn hemisphere(&self) -> Result<Hemisphere, (StatusCode, String)> {
        let raw = self.hemisphere.as_deref().unwrap_or("north");
        raw.parse::<Hemisphere>().map_err(|e| {
            tracing::warn!("Rejected hemisphere: {}", e);
            e.to_response()
        })
    }
}

#[derive(Deserialize)]
pub struct AffirmationQuery {
    pub season: Option<String>,
}

pub async fn get_season_handler(
    State(state): State<AppState>,
    Query(query): Query<HemisphereQuery>,
) -> Result<Json<SeasonDescriptor>, (StatusCode, String)> {
    let hemisphere = query.hemisphere()?;
    let descriptor = state.resolver.resolve_now(hemisphere);

    tracing::info!(
        "Resolved {} season: {} ({}%)",
        hemisphere,
        descriptor.season,
        descriptor.percentage_complete
    );

    Ok(Json(descriptor))
}

pub async fn get_all_seasons_handler(
    State(state): State<AppState>,
    Query(query): Query<HemisphereQuery>,
) -> Result<Json<Vec<SeasonSummary>>, (StatusCode, String)> {
    let hemisphere = query.hemisphere()?;
    Ok(Json(state.resolver.overview_now(hemisphere)))
}

pub async fn get_affirmation_handler(
    State(state): State<AppState>,
    Query(query): Query<AffirmationQuery>,
) -> Result<Json<AffirmationResponse>, (StatusCode, String)> {
    let raw = query.season.as_deref().unwrap_or("spring");

    let season = raw.parse::<Season>().map_err(|e| {
        tracing::warn!("Rejected affirmation request: {}", e);
        e.to_response()
    })?;

    Ok(Json(AffirmationResponse {
        affirmation: state.picker().pick_for(season).to_string(),
        season,
    }))
}
