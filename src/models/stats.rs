use serde::{Deserialize, Serialize};

use crate::models::team::TeamValue;

/// A played match as listed in the season superlatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: i32,
    pub round: i32,
    pub home_code: String,
    pub home_name: String,
    pub away_code: String,
    pub away_name: String,
    pub home_goals: i32,
    pub away_goals: i32,
}

impl MatchSummary {
    pub fn total_goals(&self) -> i64 {
        i64::from(self.home_goals) + i64::from(self.away_goals)
    }

    pub fn margin(&self) -> i64 {
        (i64::from(self.home_goals) - i64::from(self.away_goals)).abs()
    }
}

/// Every team sharing the extreme value of one metric. `value` is `None`
/// when no match has been played yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricLeaders {
    pub value: Option<i64>,
    pub teams: Vec<TeamValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub played_matches: usize,
    pub highest_total: Option<i64>,
    pub highest_scorelines: Vec<MatchSummary>,
    pub biggest_margin: Option<i64>,
    pub biggest_wins: Vec<MatchSummary>,
    pub most_wins: MetricLeaders,
    pub most_draws: MetricLeaders,
    pub most_losses: MetricLeaders,
    pub most_goals_teams: MetricLeaders,
    pub least_goals_teams: MetricLeaders,
}
