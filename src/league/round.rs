/// Parses a `round` query value and clamps it into `1..=total_rounds`.
/// Missing, blank or non-numeric input falls back to `default`.
pub fn clamp_round(raw: Option<&str>, default: i32, total_rounds: i32) -> i32 {
    let last = total_rounds.max(1);
    let requested = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok());

    match requested {
        Some(round) => round.clamp(1, last as i64) as i32,
        None => default.clamp(1, last),
    }
}
