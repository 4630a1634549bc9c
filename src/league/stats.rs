use std::collections::HashMap;

use crate::models::{Fixture, MatchSummary, MetricLeaders, StatsReport, Team, TeamValue};

#[derive(Debug, Clone, Copy, Default)]
struct SeasonTotals {
    wins: i64,
    draws: i64,
    losses: i64,
    goals_for: i64,
    goals_against: i64,
}

impl SeasonTotals {
    fn record(&mut self, scored: i32, conceded: i32) {
        self.goals_for += i64::from(scored);
        self.goals_against += i64::from(conceded);
        if scored > conceded {
            self.wins += 1;
        } else if scored < conceded {
            self.losses += 1;
        } else {
            self.draws += 1;
        }
    }

    fn goals_involved(&self) -> i64 {
        self.goals_for + self.goals_against
    }
}

#[derive(Debug, Clone, Copy)]
enum Extreme {
    Max,
    Min,
}

fn team_name<'a>(names: &HashMap<&str, &'a str>, code: &'a str) -> &'a str {
    names.get(code).copied().unwrap_or(code)
}

fn summarize(fixture: &Fixture, names: &HashMap<&str, &str>) -> Option<MatchSummary> {
    let (home_goals, away_goals) = fixture.score()?;
    Some(MatchSummary {
        id: fixture.id,
        round: fixture.round,
        home_code: fixture.home_code.clone(),
        home_name: team_name(names, &fixture.home_code).to_string(),
        away_code: fixture.away_code.clone(),
        away_name: team_name(names, &fixture.away_code).to_string(),
        home_goals,
        away_goals,
    })
}

/// Every match sharing the largest value of `key`, in input order.
fn matches_at_max(
    played: &[MatchSummary],
    key: fn(&MatchSummary) -> i64,
) -> (Option<i64>, Vec<MatchSummary>) {
    let Some(max) = played.iter().map(key).max() else {
        return (None, Vec::new());
    };
    let matches = played.iter().filter(|m| key(*m) == max).cloned().collect();
    (Some(max), matches)
}

fn leaders(
    teams: &[Team],
    totals: &HashMap<&str, SeasonTotals>,
    metric: fn(&SeasonTotals) -> i64,
    extreme: Extreme,
) -> MetricLeaders {
    let value_of = |team: &Team| {
        totals
            .get(team.code.as_str())
            .map(metric)
            .unwrap_or_default()
    };

    let values = teams.iter().map(value_of);
    let target = match extreme {
        Extreme::Max => values.max(),
        Extreme::Min => values.min(),
    };
    let Some(target) = target else {
        return MetricLeaders::default();
    };

    MetricLeaders {
        value: Some(target),
        teams: teams
            .iter()
            .filter(|team| value_of(*team) == target)
            .map(|team| TeamValue {
                code: team.code.clone(),
                name: team.name.clone(),
                value: target,
            })
            .collect(),
    }
}

/// Season superlatives over played fixtures. Every category lists all
/// tied entries. Before any match is played the report is empty and every
/// extreme value is `None`.
pub fn compute_season_stats(teams: &[Team], fixtures: &[Fixture]) -> StatsReport {
    let names: HashMap<&str, &str> = teams
        .iter()
        .map(|team| (team.code.as_str(), team.name.as_str()))
        .collect();

    let played: Vec<MatchSummary> = fixtures
        .iter()
        .filter_map(|fixture| summarize(fixture, &names))
        .collect();

    if played.is_empty() {
        return StatsReport::default();
    }

    let mut totals: HashMap<&str, SeasonTotals> = HashMap::new();
    for m in &played {
        totals
            .entry(m.home_code.as_str())
            .or_default()
            .record(m.home_goals, m.away_goals);
        totals
            .entry(m.away_code.as_str())
            .or_default()
            .record(m.away_goals, m.home_goals);
    }

    let (highest_total, highest_scorelines) = matches_at_max(&played, MatchSummary::total_goals);
    let (biggest_margin, biggest_wins) = matches_at_max(&played, MatchSummary::margin);

    StatsReport {
        played_matches: played.len(),
        highest_total,
        highest_scorelines,
        biggest_margin,
        biggest_wins,
        most_wins: leaders(teams, &totals, |t| t.wins, Extreme::Max),
        most_draws: leaders(teams, &totals, |t| t.draws, Extreme::Max),
        most_losses: leaders(teams, &totals, |t| t.losses, Extreme::Max),
        most_goals_teams: leaders(teams, &totals, SeasonTotals::goals_involved, Extreme::Max),
        least_goals_teams: leaders(teams, &totals, SeasonTotals::goals_involved, Extreme::Min),
    }
}
