pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
pub mod league;
mod middleware;
pub mod models;
pub mod state;

use axum::{Router, http::StatusCode, middleware as axum_middleware};
use middleware::{cors_layer, create_rate_limiter, rate_limit_middleware};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    db::{ResultStore, init::initialize_league},
    errors::AppError,
    state::AppState,
};

pub fn create_app(state: AppState) -> Router {
    let rate_limiter = create_rate_limiter(state.config.rate_limit_per_minute);
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .merge(http::create_http_routes(state))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(rate_limiter.clone(), req, next)
        }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let store = ResultStore::connect(&config.database_url, config.db_max_connections).await?;
    initialize_league(&store).await?;

    let port = config.port;
    let state = AppState::new(store.clone(), config);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| AppError::ServerError(format!("Failed to bind port {}: {}", port, e)))?;

    tracing::info!("League site running at http://127.0.0.1:{port}/ladder");

    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::ServerError(format!("Server error: {}", e)));

    store.close().await;
    served
}
