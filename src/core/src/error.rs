use crate::bracket::Stage;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Champion,
    Team,
    Player,
    Match,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            EntityKind::Champion => "champion",
            EntityKind::Team => "team",
            EntityKind::Player => "player",
            EntityKind::Match => "match",
        };

        write!(f, "{}", name)
    }
}

/// Validation failures raised by the tournament core.
///
/// Every variant is recoverable: the operation that produced it left the
/// prior state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CupError {
    #[error("{stage} already holds its maximum of {capacity} matches")]
    CapacityExceeded { stage: Stage, capacity: u8 },

    #[error("team {team_id} already has the maximum number of players ({limit})")]
    RosterFull { team_id: u32, limit: usize },

    #[error("player {player_id} has played {matches_played} match(es) and cannot be deleted")]
    PlayerLocked { player_id: u32, matches_played: u32 },

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("goal index {index} is out of range (ledger has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: EntityKind, id: u32 },

    #[error("{stage} is not part of this champion's bracket")]
    StageUnavailable { stage: Stage },

    #[error("no identifiers left to allocate")]
    IdsExhausted,
}

impl CupError {
    pub fn not_found(entity: EntityKind, id: u32) -> Self {
        CupError::NotFound { entity, id }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        CupError::InvalidSelection(message.into())
    }
}

pub type CupResult<T> = Result<T, CupError>;
