pub mod fixture;
pub mod ladder;
pub mod score;
pub mod stats;
pub mod team;

pub use fixture::{Fixture, FixtureDetail, RoundFixtures};
pub use ladder::LadderRow;
pub use score::{ScoreBatchPayload, ScoreUpdate};
pub use stats::{MatchSummary, MetricLeaders, StatsReport};
pub use team::{Team, TeamValue};
