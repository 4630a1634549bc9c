use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Redirect,
};
use serde::Serialize;

use crate::{
    auth::AdminAuth,
    http::handlers::RoundQuery,
    league::clamp_round,
    models::{FixtureDetail, ScoreBatchPayload},
    state::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRoundResponse {
    pub round: i32,
    pub fixtures: Vec<FixtureDetail>,
}

pub async fn get_admin_handler(
    AdminAuth(_admin): AdminAuth,
    State(state): State<AppState>,
    Query(query): Query<RoundQuery>,
) -> Result<Json<AdminRoundResponse>, (StatusCode, String)> {
    let round = clamp_round(query.round.as_deref(), 1, state.total_rounds());

    let fixtures = state.store.list_fixture_details(round).await.map_err(|e| {
        tracing::error!("Failed to load admin fixtures for round {}: {}", round, e);
        e.to_response()
    })?;

    Ok(Json(AdminRoundResponse { round, fixtures }))
}

/// Saves a batch of scores and returns to the admin page for the round.
/// A failed save is rolled back and logged, but still redirects.
pub async fn save_scores_handler(
    AdminAuth(admin): AdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<ScoreBatchPayload>,
) -> Result<Redirect, (StatusCode, String)> {
    let round = payload
        .round
        .unwrap_or(1)
        .clamp(1, state.total_rounds());

    let updates = payload.into_updates().map_err(|e| {
        tracing::warn!("Rejected score batch from {}: {}", admin, e);
        e.to_response()
    })?;

    match state.store.apply_score_updates(&updates).await {
        Ok(updated) => {
            tracing::info!("{} saved {} fixtures for round {}", admin, updated, round);
        }
        Err(err) => {
            tracing::error!("Error saving scores for round {}: {}", round, err);
        }
    }

    Ok(Redirect::to(&format!("/admin?round={}", round)))
}
