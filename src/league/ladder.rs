use std::{cmp::Ordering, collections::HashMap};

use crate::models::{Fixture, LadderRow, Team};

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// Official tie-break order: points, goal difference and goals for
/// descending, then goals against ascending.
pub fn compare_rows(a: &LadderRow, b: &LadderRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.goals_against.cmp(&b.goals_against))
}

fn record_result(row: &mut LadderRow, scored: i32, conceded: i32) {
    row.played += 1;
    row.goals_for += i64::from(scored);
    row.goals_against += i64::from(conceded);

    match scored.cmp(&conceded) {
        Ordering::Greater => {
            row.wins += 1;
            row.points += POINTS_FOR_WIN;
        }
        Ordering::Less => row.losses += 1,
        Ordering::Equal => {
            row.draws += 1;
            row.points += POINTS_FOR_DRAW;
        }
    }
}

/// Standings after every played fixture up to and including `as_of_round`.
///
/// Returns one row per team in ranked order. Rows that compare equal keep
/// the order of `teams` and still get distinct ranks.
pub fn compute_ladder(as_of_round: i32, teams: &[Team], fixtures: &[Fixture]) -> Vec<LadderRow> {
    let mut rows: Vec<LadderRow> = teams
        .iter()
        .map(|team| LadderRow::zeroed(&team.code, &team.name))
        .collect();

    let index: HashMap<&str, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| (team.code.as_str(), i))
        .collect();

    for fixture in fixtures.iter().filter(|f| f.round <= as_of_round) {
        let Some((home_goals, away_goals)) = fixture.score() else {
            continue;
        };

        let (Some(&home), Some(&away)) = (
            index.get(fixture.home_code.as_str()),
            index.get(fixture.away_code.as_str()),
        ) else {
            tracing::warn!(
                "Skipping fixture {}: unknown team {} or {}",
                fixture.id,
                fixture.home_code,
                fixture.away_code
            );
            continue;
        };

        record_result(&mut rows[home], home_goals, away_goals);
        record_result(&mut rows[away], away_goals, home_goals);
    }

    for row in rows.iter_mut() {
        row.goal_difference = row.goals_for - row.goals_against;
    }

    // sort_by is stable, so dead heats stay in roster order
    rows.sort_by(compare_rows);

    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = (position + 1) as u32;
    }

    rows
}
