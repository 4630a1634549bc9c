use sqlx::{Postgres, Transaction};

use crate::{db::ResultStore, errors::AppError, models::ScoreUpdate};

async fn write_scores(
    tx: &mut Transaction<'_, Postgres>,
    updates: &[ScoreUpdate],
) -> Result<u64, AppError> {
    let mut updated = 0;

    for update in updates {
        let result =
            sqlx::query("UPDATE fixtures SET home_goals = $1, away_goals = $2 WHERE id = $3")
                .bind(update.home_goals)
                .bind(update.away_goals)
                .bind(update.fixture_id)
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!(
                        "Failed to update fixture {}: {}",
                        update.fixture_id, e
                    ))
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Fixture with ID {} not found",
                update.fixture_id
            )));
        }
        updated += result.rows_affected();
    }

    Ok(updated)
}

impl ResultStore {
    /// Applies the whole batch or nothing: any failed update rolls back
    /// every score written before it.
    pub async fn apply_score_updates(&self, updates: &[ScoreUpdate]) -> Result<u64, AppError> {
        if updates.is_empty() {
            return Ok(0);
        }

        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

        match write_scores(&mut tx, updates).await {
            Ok(updated) => {
                tx.commit().await.map_err(|e| {
                    AppError::DatabaseError(format!("Failed to commit scores: {}", e))
                })?;
                tracing::info!("Saved scores for {} fixtures", updated);
                Ok(updated)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!("Failed to roll back score batch: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}
