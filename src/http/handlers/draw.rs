use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::{
    http::handlers::RoundQuery,
    league::clamp_round,
    models::{RoundFixtures, Team},
    state::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResponse {
    pub teams: Vec<Team>,
    pub rounds: Vec<RoundFixtures>,
    pub selected_round: i32,
}

pub async fn get_draw_handler(
    State(state): State<AppState>,
    Query(query): Query<RoundQuery>,
) -> Result<Json<DrawResponse>, (StatusCode, String)> {
    let total_rounds = state.total_rounds();
    let selected_round = clamp_round(query.round.as_deref(), 1, total_rounds);

    let teams = state.store.list_teams().await.map_err(|e| {
        tracing::error!("Failed to load teams: {}", e);
        e.to_response()
    })?;

    let mut rounds = Vec::with_capacity(total_rounds as usize);
    for round in 1..=total_rounds {
        let fixtures = state.store.list_fixture_details(round).await.map_err(|e| {
            tracing::error!("Failed to load draw for round {}: {}", round, e);
            e.to_response()
        })?;
        rounds.push(RoundFixtures { round, fixtures });
    }

    Ok(Json(DrawResponse {
        teams,
        rounds,
        selected_round,
    }))
}
