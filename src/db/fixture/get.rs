use crate::{
    db::ResultStore,
    errors::AppError,
    league::team_style,
    models::{Fixture, FixtureDetail},
};

impl ResultStore {
    pub async fn list_fixtures(&self) -> Result<Vec<Fixture>, AppError> {
        let fixtures = sqlx::query_as::<_, Fixture>(
            "SELECT id, round, home_code, away_code, home_goals, away_goals
            FROM fixtures
            ORDER BY round, id",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch fixtures: {}", e)))?;

        Ok(fixtures)
    }

    pub async fn list_fixture_details(&self, round: i32) -> Result<Vec<FixtureDetail>, AppError> {
        let mut fixtures = sqlx::query_as::<_, FixtureDetail>(
            "SELECT f.id, f.round, f.home_code, f.away_code, f.home_goals, f.away_goals,
                th.name AS home_name, ta.name AS away_name,
                th.color1 AS home_color1, th.color2 AS home_color2,
                ta.color1 AS away_color1, ta.color2 AS away_color2
            FROM fixtures f
            JOIN teams th ON f.home_code = th.code
            JOIN teams ta ON f.away_code = ta.code
            WHERE f.round = $1
            ORDER BY f.id",
        )
        .bind(round)
        .fetch_all(self.pool())
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!("Failed to fetch fixtures for round {}: {}", round, e))
        })?;

        for fixture in fixtures.iter_mut() {
            fixture.home_style = team_style(&fixture.home_color1, &fixture.home_color2);
            fixture.away_style = team_style(&fixture.away_color1, &fixture.away_color2);
        }

        Ok(fixtures)
    }
}
