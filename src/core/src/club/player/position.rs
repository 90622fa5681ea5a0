use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Formation role of a player. Every variant except `Reserve` is an on-field slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerPosition {
    Goalkeeper,
    #[serde(rename = "Left Wing")]
    LeftWing,
    #[serde(rename = "Right Wing")]
    RightWing,
    #[serde(rename = "Center Forward")]
    CenterForward,
    #[serde(rename = "Left Midfielder")]
    LeftMidfielder,
    #[serde(rename = "Right Midfielder")]
    RightMidfielder,
    #[default]
    Reserve,
}

impl PlayerPosition {
    pub const ON_FIELD: [PlayerPosition; 6] = [
        PlayerPosition::Goalkeeper,
        PlayerPosition::LeftWing,
        PlayerPosition::RightWing,
        PlayerPosition::CenterForward,
        PlayerPosition::LeftMidfielder,
        PlayerPosition::RightMidfielder,
    ];

    #[inline]
    pub fn is_on_field(&self) -> bool {
        !self.is_reserve()
    }

    #[inline]
    pub fn is_reserve(&self) -> bool {
        *self == PlayerPosition::Reserve
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "Goalkeeper",
            PlayerPosition::LeftWing => "Left Wing",
            PlayerPosition::RightWing => "Right Wing",
            PlayerPosition::CenterForward => "Center Forward",
            PlayerPosition::LeftMidfielder => "Left Midfielder",
            PlayerPosition::RightMidfielder => "Right Midfielder",
            PlayerPosition::Reserve => "Reserve",
        }
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name())
    }
}
