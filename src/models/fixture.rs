use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: i32,
    pub round: i32,
    pub home_code: String,
    pub away_code: String,
    pub home_goals: Option<i32>,
    pub away_goals: Option<i32>,
}

impl Fixture {
    pub fn unplayed(id: i32, round: i32, home_code: &str, away_code: &str) -> Self {
        Self {
            id,
            round,
            home_code: home_code.to_string(),
            away_code: away_code.to_string(),
            home_goals: None,
            away_goals: None,
        }
    }

    pub fn with_score(mut self, home_goals: i32, away_goals: i32) -> Self {
        self.home_goals = Some(home_goals);
        self.away_goals = Some(away_goals);
        self
    }

    /// `(home, away)` goals, present only once both sides have a score.
    pub fn score(&self) -> Option<(i32, i32)> {
        match (self.home_goals, self.away_goals) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }
}

/// Fixture joined with both teams, as shown on the draw and admin pages.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FixtureDetail {
    pub id: i32,
    pub round: i32,
    pub home_code: String,
    pub away_code: String,
    pub home_goals: Option<i32>,
    pub away_goals: Option<i32>,
    pub home_name: String,
    pub away_name: String,
    pub home_color1: String,
    pub home_color2: String,
    pub away_color1: String,
    pub away_color2: String,
    #[sqlx(skip)]
    pub home_style: String,
    #[sqlx(skip)]
    pub away_style: String,
}

/// Fixtures of one round, in draw order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundFixtures {
    pub round: i32,
    pub fixtures: Vec<FixtureDetail>,
}
