use crate::{db::ResultStore, errors::AppError};

const CREATE_TEAMS: &str = "CREATE TABLE IF NOT EXISTS teams (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    color1 TEXT NOT NULL,
    color2 TEXT NOT NULL
)";

const CREATE_FIXTURES: &str = "CREATE TABLE IF NOT EXISTS fixtures (
    id SERIAL PRIMARY KEY,
    round INTEGER NOT NULL,
    home_code TEXT NOT NULL REFERENCES teams(code),
    away_code TEXT NOT NULL REFERENCES teams(code),
    home_goals INTEGER CHECK (home_goals BETWEEN 0 AND 999),
    away_goals INTEGER CHECK (away_goals BETWEEN 0 AND 999)
)";

impl ResultStore {
    pub async fn create_schema(&self) -> Result<(), AppError> {
        for statement in [CREATE_TEAMS, CREATE_FIXTURES] {
            sqlx::query(statement)
                .execute(self.pool())
                .await
                .map_err(|e| AppError::DatabaseError(format!("Failed to create schema: {}", e)))?;
        }
        Ok(())
    }
}
