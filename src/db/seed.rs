use sqlx::{Postgres, QueryBuilder};

use crate::{db::ResultStore, errors::AppError, models::Team};

/// `(code, name, primary color, secondary color)`
pub const SEED_TEAMS: [(&str, &str, &str, &str); 10] = [
    ("TIG", "Camden Tigers", "#FF8C00", "#000000"),
    ("CAM", "Camden Falcons", "#D40000", "#000000"),
    ("OPR", "Oran Park Rovers", "#FFFFFF", "#000000"),
    ("HAR", "Harrington United", "#32CD32", "#001F3F"),
    ("ESC", "Eschol Park Wolves", "#800000", "#FFD700"),
    ("TAH", "Tahmoor SC", "#006A4E", "#FFFFFF"),
    ("GSC", "Gunners SC", "#D40000", "#FFFFFF"),
    ("NAR", "Narellan Rangers", "#4169E1", "#D40000"),
    ("STM", "St Marys Eaglevale", "#DAA520", "#006400"),
    ("GRH", "Gregory Hills Stallions", "#800080", "#FFD700"),
];

/// The season draw, one entry per round, written as `HOME v AWAY`.
pub const SEED_DRAW: [[&str; 5]; 18] = [
    ["TAH v TIG", "STM v ESC", "OPR v GRH", "GSC v CAM", "NAR v HAR"],
    ["NAR v GRH", "CAM v TIG", "HAR v GSC", "TAH v STM", "ESC v OPR"],
    ["GSC v GRH", "NAR v ESC", "OPR v STM", "TAH v CAM", "TIG v HAR"],
    ["STM v NAR", "OPR v TAH", "GRH v TIG", "HAR v CAM", "ESC v GSC"],
    ["STM v GSC", "TIG v ESC", "TAH v HAR", "NAR v OPR", "CAM v GRH"],
    ["NAR v TAH", "OPR v GSC", "STM v TIG", "GRH v HAR", "ESC v CAM"],
    ["HAR v ESC", "GSC v NAR", "CAM v STM", "TAH v GRH", "TIG v OPR"],
    ["NAR v TIG", "OPR v CAM", "GSC v TAH", "ESC v GRH", "STM v HAR"],
    ["TIG v GSC", "GRH v STM", "HAR v OPR", "TAH v ESC", "CAM v NAR"],
    ["TIG v TAH", "GRH v OPR", "HAR v NAR", "ESC v STM", "CAM v GSC"],
    ["TIG v CAM", "STM v TAH", "GRH v NAR", "GSC v HAR", "OPR v ESC"],
    ["STM v OPR", "GRH v GSC", "ESC v NAR", "HAR v TIG", "CAM v TAH"],
    ["TIG v GRH", "TAH v OPR", "NAR v STM", "GSC v ESC", "CAM v HAR"],
    ["GRH v CAM", "OPR v NAR", "ESC v TIG", "HAR v TAH", "GSC v STM"],
    ["TAH v NAR", "TIG v STM", "HAR v GRH", "GSC v OPR", "CAM v ESC"],
    ["STM v CAM", "GRH v TAH", "NAR v GSC", "OPR v TIG", "ESC v HAR"],
    ["TAH v GSC", "TIG v NAR", "GRH v ESC", "HAR v STM", "CAM v OPR"],
    ["GSC v TIG", "STM v GRH", "NAR v CAM", "OPR v HAR", "ESC v TAH"],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFixture {
    pub round: i32,
    pub home_code: String,
    pub away_code: String,
}

pub fn seed_teams() -> Vec<Team> {
    SEED_TEAMS
        .iter()
        .map(|(code, name, color1, color2)| Team::new(code, name, color1, color2))
        .collect()
}

/// Splits `"TAH v TIG"` into `("TAH", "TIG")`, dropping any whitespace
/// inside the codes.
pub fn parse_pairing(pairing: &str) -> Option<(String, String)> {
    let (home, away) = pairing.split_once('v')?;
    let clean = |code: &str| -> String { code.chars().filter(|c| !c.is_whitespace()).collect() };
    let (home, away) = (clean(home), clean(away));
    if home.is_empty() || away.is_empty() {
        return None;
    }
    Some((home, away))
}

pub fn seed_fixtures() -> Result<Vec<SeedFixture>, AppError> {
    let mut fixtures = Vec::new();
    for (index, pairings) in SEED_DRAW.iter().enumerate() {
        let round = index as i32 + 1;
        for pairing in pairings {
            let (home_code, away_code) = parse_pairing(pairing).ok_or_else(|| {
                AppError::ServerError(format!("Malformed pairing in seed draw: '{}'", pairing))
            })?;
            fixtures.push(SeedFixture {
                round,
                home_code,
                away_code,
            });
        }
    }
    Ok(fixtures)
}

impl ResultStore {
    pub async fn count_teams(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teams")
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to count teams: {}", e)))?;
        Ok(count)
    }

    pub async fn count_fixtures(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fixtures")
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to count fixtures: {}", e)))?;
        Ok(count)
    }

    pub async fn insert_teams(&self, teams: &[Team]) -> Result<(), AppError> {
        if teams.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO teams (code, name, color1, color2) ");
        builder.push_values(teams, |mut row, team| {
            row.push_bind(&team.code)
                .push_bind(&team.name)
                .push_bind(&team.color1)
                .push_bind(&team.color2);
        });

        builder
            .build()
            .execute(self.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to seed teams: {}", e)))?;

        tracing::info!("Seeded {} teams", teams.len());
        Ok(())
    }

    pub async fn insert_fixtures(&self, fixtures: &[SeedFixture]) -> Result<(), AppError> {
        if fixtures.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO fixtures (round, home_code, away_code) ");
        builder.push_values(fixtures, |mut row, fixture| {
            row.push_bind(fixture.round)
                .push_bind(&fixture.home_code)
                .push_bind(&fixture.away_code);
        });

        builder
            .build()
            .execute(self.pool())
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to seed fixtures: {}", e)))?;

        tracing::info!("Seeded {} fixtures", fixtures.len());
        Ok(())
    }
}
