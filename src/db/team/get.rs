use crate::{db::ResultStore, errors::AppError, models::Team};

impl ResultStore {
    pub async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT code, name, color1, color2
            FROM teams
            ORDER BY name",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch teams: {}", e)))?;

        Ok(teams)
    }
}
