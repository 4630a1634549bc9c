use league_site::{
    league::compute_ladder,
    models::{Fixture, LadderRow, Team},
};

fn team(code: &str) -> Team {
    Team::new(code, &format!("{} FC", code), "#000000", "#FFFFFF")
}

fn roster(codes: &[&str]) -> Vec<Team> {
    codes.iter().map(|code| team(code)).collect()
}

fn played(id: i32, round: i32, home: &str, away: &str, hg: i32, ag: i32) -> Fixture {
    Fixture::unplayed(id, round, home, away).with_score(hg, ag)
}

fn row<'a>(table: &'a [LadderRow], code: &str) -> &'a LadderRow {
    table
        .iter()
        .find(|r| r.code == code)
        .unwrap_or_else(|| panic!("Team '{}' missing from ladder", code))
}

fn sample_season() -> (Vec<Team>, Vec<Fixture>) {
    let teams = roster(&["A", "B", "C", "D"]);
    let fixtures = vec![
        played(1, 1, "A", "B", 2, 0),
        played(2, 1, "C", "D", 1, 1),
        played(3, 2, "A", "C", 0, 3),
        played(4, 2, "B", "D", 2, 2),
        played(5, 3, "D", "A", 1, 4),
        Fixture::unplayed(6, 3, "B", "C"),
    ];
    (teams, fixtures)
}

#[test]
fn test_round_one_example() {
    let teams = roster(&["A", "B", "C", "D"]);
    let fixtures = vec![played(1, 1, "A", "B", 2, 0), played(2, 1, "C", "D", 1, 1)];

    let table = compute_ladder(1, &teams, &fixtures);

    assert_eq!(table[0].code, "A");
    assert_eq!(table[0].points, 3);
    assert_eq!(table[0].goal_difference, 2);

    // C and D are level on everything, so roster order decides
    assert_eq!(table[1].code, "C");
    assert_eq!(table[2].code, "D");
    assert_eq!(table[1].points, 1);
    assert_eq!(table[2].points, 1);
    assert_eq!(table[1].goal_difference, 0);

    assert_eq!(table[3].code, "B");
    assert_eq!(table[3].losses, 1);
    assert_eq!(table[3].goal_difference, -2);
}

#[test]
fn test_dead_heat_follows_roster_order() {
    let fixtures = vec![played(1, 1, "C", "D", 1, 1)];

    let table = compute_ladder(1, &roster(&["D", "C"]), &fixtures);
    assert_eq!(table[0].code, "D");
    assert_eq!(table[1].code, "C");
    assert_eq!(table[0].rank, 1);
    assert_eq!(table[1].rank, 2);
}

#[test]
fn test_goals_for_breaks_tie() {
    // A and B both finish on 3 points and +1, A having scored more
    let fixtures = vec![
        played(1, 1, "A", "X", 3, 2),
        played(2, 1, "B", "Y", 1, 0),
    ];

    for codes in [["A", "B", "X", "Y"], ["B", "A", "Y", "X"]] {
        let table = compute_ladder(1, &roster(&codes), &fixtures);
        assert_eq!(table[0].code, "A");
        assert_eq!(table[1].code, "B");
    }
}

#[test]
fn test_goal_difference_breaks_tie() {
    // Both on 3 points; B has the better goal difference despite scoring less
    let fixtures = vec![
        played(1, 1, "A", "X", 4, 3),
        played(2, 1, "B", "Y", 2, 0),
    ];
    let table = compute_ladder(1, &roster(&["A", "B", "X", "Y"]), &fixtures);

    let a = row(&table, "A");
    let b = row(&table, "B");
    assert_eq!(a.points, b.points);
    assert!(a.goals_for > b.goals_for);
    assert!(b.rank < a.rank);
}

#[test]
fn test_tie_break_keys_in_order() {
    use league_site::league::ladder::compare_rows;
    use std::cmp::Ordering;

    let mut better = LadderRow::zeroed("A", "A");
    let mut worse = LadderRow::zeroed("B", "B");

    // Only goals against differs: fewer conceded ranks higher
    better.goals_against = 1;
    worse.goals_against = 2;
    assert_eq!(compare_rows(&better, &worse), Ordering::Less);

    // Goals for outranks goals against
    worse.goals_for = 5;
    assert_eq!(compare_rows(&better, &worse), Ordering::Greater);

    // Goal difference outranks goals for
    better.goal_difference = 1;
    assert_eq!(compare_rows(&better, &worse), Ordering::Less);

    // Points outrank everything
    worse.points = 1;
    assert_eq!(compare_rows(&better, &worse), Ordering::Greater);

    assert_eq!(compare_rows(&better, &better.clone()), Ordering::Equal);
}

#[test]
fn test_points_beat_goal_difference() {
    let fixtures = vec![
        played(1, 1, "A", "B", 9, 0),
        played(2, 2, "B", "C", 1, 0),
        played(3, 3, "A", "C", 0, 1),
        played(4, 4, "B", "A", 1, 0),
    ];
    let table = compute_ladder(4, &roster(&["A", "B", "C"]), &fixtures);

    // B has 6 points at -7, A has 3 points at +7
    assert_eq!(table[0].code, "B");
    assert_eq!(table[0].points, 6);
    assert_eq!(row(&table, "A").points, 3);
    assert!(row(&table, "A").goal_difference > table[0].goal_difference);
}

#[test]
fn test_only_rounds_up_to_boundary_count() {
    let (teams, fixtures) = sample_season();

    let after_one = compute_ladder(1, &teams, &fixtures);
    assert_eq!(row(&after_one, "A").played, 1);
    assert_eq!(row(&after_one, "A").points, 3);

    let after_three = compute_ladder(3, &teams, &fixtures);
    assert_eq!(row(&after_three, "A").played, 3);
    assert_eq!(row(&after_three, "A").points, 6);
    assert_eq!(row(&after_three, "A").goals_for, 6);
    assert_eq!(row(&after_three, "A").goals_against, 4);
}

#[test]
fn test_unplayed_and_half_scored_fixtures_are_ignored() {
    let teams = roster(&["A", "B"]);
    let mut half = Fixture::unplayed(2, 1, "B", "A");
    half.home_goals = Some(5);
    let fixtures = vec![Fixture::unplayed(1, 1, "A", "B"), half];

    let table = compute_ladder(1, &teams, &fixtures);
    assert!(table.iter().all(|r| r.played == 0 && r.points == 0));
}

#[test]
fn test_no_fixtures_yields_zeroed_ranked_rows() {
    let teams = roster(&["A", "B", "C"]);
    let table = compute_ladder(5, &teams, &[]);

    assert_eq!(table.len(), 3);
    let codes: Vec<&str> = table.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["A", "B", "C"]);
    let ranks: Vec<u32> = table.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn test_unknown_team_fixture_is_skipped() {
    let teams = roster(&["A", "B"]);
    let fixtures = vec![played(1, 1, "A", "ZZZ", 3, 0), played(2, 1, "A", "B", 1, 0)];

    let table = compute_ladder(1, &teams, &fixtures);
    assert_eq!(table.len(), 2);
    assert_eq!(row(&table, "A").played, 1);
    assert_eq!(row(&table, "A").goals_for, 1);
}

#[test]
fn test_is_deterministic() {
    let (teams, fixtures) = sample_season();
    for round in 1..=3 {
        let first = compute_ladder(round, &teams, &fixtures);
        let second = compute_ladder(round, &teams, &fixtures);
        assert_eq!(first, second);
    }
}

#[test]
fn test_row_formulas_hold() {
    let (teams, fixtures) = sample_season();
    for round in 1..=3 {
        for r in compute_ladder(round, &teams, &fixtures) {
            assert_eq!(r.points, 3 * r.wins + r.draws);
            assert_eq!(r.goal_difference, r.goals_for - r.goals_against);
            assert_eq!(r.played, r.wins + r.draws + r.losses);
        }
    }
}

#[test]
fn test_results_are_conserved() {
    let (teams, fixtures) = sample_season();

    for round in 1..=3 {
        let table = compute_ladder(round, &teams, &fixtures);
        let counted: Vec<(i32, i32)> = fixtures
            .iter()
            .filter(|f| f.round <= round)
            .filter_map(|f| f.score())
            .collect();
        let decisive = counted.iter().filter(|(h, a)| h != a).count() as u32;
        let drawn = counted.iter().filter(|(h, a)| h == a).count() as u32;

        let wins: u32 = table.iter().map(|r| r.wins).sum();
        let losses: u32 = table.iter().map(|r| r.losses).sum();
        let draws: u32 = table.iter().map(|r| r.draws).sum();

        assert_eq!(wins, decisive);
        assert_eq!(losses, decisive);
        assert_eq!(draws, 2 * drawn);
    }
}

#[test]
fn test_ranks_are_one_to_n() {
    let (teams, fixtures) = sample_season();
    for round in 1..=3 {
        let table = compute_ladder(round, &teams, &fixtures);
        assert_eq!(table.len(), teams.len());
        for (i, r) in table.iter().enumerate() {
            assert_eq!(r.rank, i as u32 + 1);
        }
    }
}

#[test]
fn test_huge_scores_do_not_overflow() {
    let g = i32::MAX;
    let fixtures = vec![played(1, 1, "A", "B", g, 0), played(2, 2, "A", "B", g, 0)];

    let table = compute_ladder(2, &roster(&["A", "B"]), &fixtures);

    let a = row(&table, "A");
    assert_eq!(a.rank, 1);
    assert_eq!(a.goals_for, 2 * i64::from(g));
    assert_eq!(a.goal_difference, 2 * i64::from(g));

    let b = row(&table, "B");
    assert_eq!(b.goals_against, 2 * i64::from(g));
    assert_eq!(b.goal_difference, -2 * i64::from(g));
}
