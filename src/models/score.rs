use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// Raw goal count as typed into the admin form: a number, or text that may
/// be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalsInput {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub fixture_id: i32,
    pub side: Side,
    #[serde(default)]
    pub value: Option<GoalsInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBatchPayload {
    #[serde(default)]
    pub round: Option<i32>,
    #[serde(default)]
    pub updates: Vec<ScoreEntry>,
}

/// Validated scores for one fixture. Both goals are `Some` or both `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub fixture_id: i32,
    pub home_goals: Option<i32>,
    pub away_goals: Option<i32>,
}

/// Highest goal count one side can be given. Kept in step with the
/// `fixtures` CHECK constraints.
pub const MAX_GOALS: i32 = 999;

pub fn parse_goals(input: Option<&GoalsInput>) -> Result<Option<i32>, AppError> {
    let raw = match input {
        None => return Ok(None),
        Some(GoalsInput::Number(n)) => *n,
        Some(GoalsInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("Invalid goal count: '{}'", text)))?
        }
    };

    if raw > i64::from(MAX_GOALS) {
        return Err(AppError::BadRequest(format!(
            "Goal count out of range: {} (max {})",
            raw, MAX_GOALS
        )));
    }

    Ok(Some(raw.max(0) as i32))
}

impl ScoreBatchPayload {
    /// Groups the submitted sides per fixture, ascending by fixture id.
    pub fn into_updates(self) -> Result<Vec<ScoreUpdate>, AppError> {
        let mut per_fixture: BTreeMap<i32, (Option<i32>, Option<i32>)> = BTreeMap::new();

        for entry in &self.updates {
            let goals = parse_goals(entry.value.as_ref())?;
            let sides = per_fixture.entry(entry.fixture_id).or_default();
            match entry.side {
                Side::Home => sides.0 = goals,
                Side::Away => sides.1 = goals,
            }
        }

        Ok(per_fixture
            .into_iter()
            .map(|(fixture_id, sides)| match sides {
                (Some(home), Some(away)) => ScoreUpdate {
                    fixture_id,
                    home_goals: Some(home),
                    away_goals: Some(away),
                },
                (home, away) => {
                    if home.is_some() || away.is_some() {
                        tracing::warn!(
                            "Fixture {} submitted with one side only, storing as unplayed",
                            fixture_id
                        );
                    }
                    ScoreUpdate {
                        fixture_id,
                        home_goals: None,
                        away_goals: None,
                    }
                }
            })
            .collect())
    }
}
