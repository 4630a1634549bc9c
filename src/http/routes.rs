use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    http::handlers::{
        get_admin_handler, get_draw_handler, get_ladder_handler, get_stats_handler,
        save_scores_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let public = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/", get(|| async { Redirect::to("/ladder") }))
        .route("/ladder", get(get_ladder_handler))
        .route("/draw", get(get_draw_handler))
        .route("/stats", get(get_stats_handler))
        .route("/admin", get(get_admin_handler))
        .route("/admin/save", post(save_scores_handler))
        .nest_service("/public", public)
        .with_state(state)
}
