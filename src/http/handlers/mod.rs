pub mod admin;
pub mod draw;
pub mod ladder;
pub mod stats;

use serde::Deserialize;

pub use admin::{get_admin_handler, save_scores_handler};
pub use draw::get_draw_handler;
pub use ladder::get_ladder_handler;
pub use stats::get_stats_handler;

/// `?round=` as typed by the visitor; clamped before use.
#[derive(Debug, Default, Deserialize)]
pub struct RoundQuery {
    pub round: Option<String>,
}
