pub mod bracket;
pub mod champion;
pub mod club;
pub mod error;
pub mod r#match;
pub mod schedule;
pub mod statistics;
pub mod store;

pub use bracket::{BracketBuilder, BracketRound, Stage};
pub use champion::{Champion, StartingRound};
pub use club::{Lineup, Player, PlayerCollection, PlayerPosition, SlotAssignment, Team};
pub use error::{CupError, CupResult, EntityKind};
pub use r#match::{GoalLedger, GoalScorer, ManOfTheMatch, Match, MatchStatus, TeamSide};
pub use schedule::FixtureCalendar;
pub use statistics::{ScorerStat, TopScorerAggregator};
pub use store::TournamentStore;
