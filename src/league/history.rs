use std::collections::BTreeMap;

use crate::{
    league::ladder::compute_ladder,
    models::{Fixture, Team},
};

/// Ladder position of every team after each round, keyed by team code.
/// Index `r - 1` of a series holds the rank as of round `r`.
pub fn compute_position_history(
    teams: &[Team],
    fixtures: &[Fixture],
    total_rounds: i32,
) -> BTreeMap<String, Vec<u32>> {
    let rounds = usize::try_from(total_rounds).unwrap_or(0);

    let mut positions: BTreeMap<String, Vec<u32>> = teams
        .iter()
        .map(|team| (team.code.clone(), Vec::with_capacity(rounds)))
        .collect();

    for round in 1..=total_rounds {
        for row in compute_ladder(round, teams, fixtures) {
            if let Some(series) = positions.get_mut(&row.code) {
                series.push(row.rank);
            }
        }
    }

    positions
}
