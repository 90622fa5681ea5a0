use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// One knockout round. Variants are declared in bracket order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "r16")]
    RoundOf16,
    #[serde(rename = "quarter")]
    Quarterfinal,
    #[serde(rename = "semi")]
    Semifinal,
    #[serde(rename = "final")]
    Final,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::RoundOf16,
        Stage::Quarterfinal,
        Stage::Semifinal,
        Stage::Final,
    ];

    /// Maximum number of matches the stage can hold.
    pub fn capacity(&self) -> u8 {
        match self {
            Stage::RoundOf16 => 8,
            Stage::Quarterfinal => 4,
            Stage::Semifinal => 2,
            Stage::Final => 1,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::RoundOf16 => "Round of 16",
            Stage::Quarterfinal => "Quarter-Finals",
            Stage::Semifinal => "Semi-Finals",
            Stage::Final => "Final",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Stage::RoundOf16 => "r16",
            Stage::Quarterfinal => "quarter",
            Stage::Semifinal => "semi",
            Stage::Final => "final",
        }
    }

    pub fn is_final(&self) -> bool {
        *self == Stage::Final
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_halve_each_round() {
        let capacities: Vec<u8> = Stage::ALL.iter().map(|s| s.capacity()).collect();
        assert_eq!(capacities, vec![8, 4, 2, 1]);
        assert!(Stage::Final.is_final());
        assert!(!Stage::Semifinal.is_final());
    }

    #[test]
    fn stage_uses_short_wire_names() {
        assert_eq!(serde_json::to_string(&Stage::Quarterfinal).unwrap(), "\"quarter\"");
        let stage: Stage = serde_json::from_str("\"r16\"").unwrap();
        assert_eq!(stage, Stage::RoundOf16);
    }
}
