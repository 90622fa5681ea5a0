use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    Playing,
    Ended,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 3] = [
        MatchStatus::NotStarted,
        MatchStatus::Playing,
        MatchStatus::Ended,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MatchStatus::NotStarted => "Not Started",
            MatchStatus::Playing => "Playing",
            MatchStatus::Ended => "Ended",
        }
    }
}

impl Display for MatchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name())
    }
}

/// A status change applied by an administrator. Any state may move to any
/// other; moving backwards is allowed and treated as a correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    pub from: MatchStatus,
    pub to: MatchStatus,
}

impl StatusTransition {
    pub fn new(from: MatchStatus, to: MatchStatus) -> Self {
        StatusTransition { from, to }
    }

    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    pub fn is_correction(&self) -> bool {
        self.to < self.from
    }
}

impl Display for StatusTransition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_of_states_is_a_valid_transition() {
        for from in MatchStatus::ALL {
            for to in MatchStatus::ALL {
                let transition = StatusTransition::new(from, to);
                assert_eq!(transition.is_noop(), from == to);
            }
        }
    }

    #[test]
    fn backwards_moves_are_corrections() {
        assert!(StatusTransition::new(MatchStatus::Ended, MatchStatus::NotStarted).is_correction());
        assert!(!StatusTransition::new(MatchStatus::NotStarted, MatchStatus::Ended).is_correction());
    }

    #[test]
    fn not_started_keeps_its_spaced_name() {
        assert_eq!(serde_json::to_string(&MatchStatus::NotStarted).unwrap(), "\"Not Started\"");
        let status: MatchStatus = serde_json::from_str("\"Playing\"").unwrap();
        assert_eq!(status, MatchStatus::Playing);
    }
}
