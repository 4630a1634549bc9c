use std::collections::BTreeMap;

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::{
    league::{compute_position_history, compute_season_stats},
    models::{StatsReport, Team},
    state::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub teams: Vec<Team>,
    pub positions: BTreeMap<String, Vec<u32>>,
    pub stats: StatsReport,
}

pub async fn get_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, (StatusCode, String)> {
    let teams = state.store.list_teams().await.map_err(|e| {
        tracing::error!("Failed to load teams: {}", e);
        e.to_response()
    })?;
    let fixtures = state.store.list_fixtures().await.map_err(|e| {
        tracing::error!("Failed to load fixtures: {}", e);
        e.to_response()
    })?;

    let positions = compute_position_history(&teams, &fixtures, state.total_rounds());
    let stats = compute_season_stats(&teams, &fixtures);

    Ok(Json(StatsResponse {
        teams,
        positions,
        stats,
    }))
}
