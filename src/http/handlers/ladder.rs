use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::{
    http::handlers::RoundQuery,
    league::{clamp_round, compute_ladder},
    models::LadderRow,
    state::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderResponse {
    pub round: i32,
    pub table: Vec<LadderRow>,
}

pub async fn get_ladder_handler(
    State(state): State<AppState>,
    Query(query): Query<RoundQuery>,
) -> Result<Json<LadderResponse>, (StatusCode, String)> {
    let total_rounds = state.total_rounds();
    let round = clamp_round(query.round.as_deref(), total_rounds, total_rounds);

    let teams = state.store.list_teams().await.map_err(|e| {
        tracing::error!("Failed to load teams: {}", e);
        e.to_response()
    })?;
    let fixtures = state.store.list_fixtures().await.map_err(|e| {
        tracing::error!("Failed to load fixtures: {}", e);
        e.to_response()
    })?;

    Ok(Json(LadderResponse {
        round,
        table: compute_ladder(round, &teams, &fixtures),
    }))
}
