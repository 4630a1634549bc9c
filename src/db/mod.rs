pub mod fixture;
pub mod init;
pub mod schema;
pub mod seed;
pub mod team;

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::errors::AppError;

/// Handle over the league database. Opened once on startup, cloned into
/// request state, closed on shutdown.
#[derive(Clone, Debug)]
pub struct ResultStore {
    pool: PgPool,
}

impl ResultStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {}", e)))?;

        tracing::info!("Connected to Postgres (max {} connections)", max_connections);
        Ok(Self { pool })
    }

    /// Builds the pool without opening a connection until first use. Each
    /// acquire gives up after `acquire_timeout`.
    pub fn connect_lazy(database_url: &str, acquire_timeout: Duration) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(acquire_timeout)
            .connect_lazy(database_url)
            .map_err(|e| AppError::DatabaseError(format!("Invalid database url: {}", e)))?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
