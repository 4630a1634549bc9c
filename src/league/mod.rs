pub mod history;
pub mod ladder;
pub mod round;
pub mod stats;
pub mod style;

pub use history::compute_position_history;
pub use ladder::compute_ladder;
pub use round::clamp_round;
pub use stats::compute_season_stats;
pub use style::team_style;
