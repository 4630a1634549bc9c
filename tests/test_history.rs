use league_site::{
    league::{compute_ladder, compute_position_history},
    models::{Fixture, Team},
};

fn roster(codes: &[&str]) -> Vec<Team> {
    codes
        .iter()
        .map(|code| Team::new(code, code, "#FFFFFF", "#000000"))
        .collect()
}

fn played(id: i32, round: i32, home: &str, away: &str, hg: i32, ag: i32) -> Fixture {
    Fixture::unplayed(id, round, home, away).with_score(hg, ag)
}

#[test]
fn test_every_series_spans_the_season() {
    let teams = roster(&["A", "B", "C", "D"]);
    let fixtures = vec![played(1, 1, "A", "B", 1, 0), played(2, 2, "C", "D", 2, 2)];

    let history = compute_position_history(&teams, &fixtures, 18);

    assert_eq!(history.len(), 4);
    for series in history.values() {
        assert_eq!(series.len(), 18);
    }
}

#[test]
fn test_trajectory_tracks_results() {
    let teams = roster(&["A", "B", "C"]);
    let fixtures = vec![
        played(1, 1, "A", "B", 1, 0),
        played(2, 2, "C", "A", 3, 0),
        played(3, 3, "C", "B", 2, 0),
    ];

    let history = compute_position_history(&teams, &fixtures, 3);

    assert_eq!(history["A"], vec![1, 2, 2]);
    assert_eq!(history["C"], vec![2, 1, 1]);
    assert_eq!(history["B"], vec![3, 3, 3]);
}

#[test]
fn test_matches_ladder_for_each_round() {
    let teams = roster(&["A", "B", "C", "D"]);
    let fixtures = vec![
        played(1, 1, "A", "B", 0, 2),
        played(2, 1, "C", "D", 1, 0),
        played(3, 2, "A", "C", 4, 1),
        played(4, 2, "B", "D", 1, 1),
        Fixture::unplayed(5, 3, "A", "D"),
    ];

    let history = compute_position_history(&teams, &fixtures, 3);

    for round in 1..=3 {
        for row in compute_ladder(round, &teams, &fixtures) {
            assert_eq!(history[&row.code][(round - 1) as usize], row.rank);
        }
    }
}

#[test]
fn test_unplayed_season_still_ranks() {
    let teams = roster(&["B", "A"]);
    let history = compute_position_history(&teams, &[], 2);

    // Nothing played: roster order holds every round
    assert_eq!(history["B"], vec![1, 1]);
    assert_eq!(history["A"], vec![2, 2]);
}

#[test]
fn test_zero_rounds_gives_empty_series() {
    let teams = roster(&["A", "B"]);
    let history = compute_position_history(&teams, &[], 0);

    assert_eq!(history.len(), 2);
    assert!(history.values().all(|series| series.is_empty()));
}
