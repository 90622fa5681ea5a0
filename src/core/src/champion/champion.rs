use crate::bracket::Stage;
use crate::champion::ChampionBuilder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// First knockout round a champion is played from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartingRound {
    #[default]
    #[serde(rename = "Round of 16")]
    RoundOf16,
    #[serde(rename = "Quarterfinal")]
    Quarterfinal,
}

impl StartingRound {
    pub fn first_stage(&self) -> Stage {
        match self {
            StartingRound::RoundOf16 => Stage::RoundOf16,
            StartingRound::Quarterfinal => Stage::Quarterfinal,
        }
    }

    /// Stages rendered for this starting round, in bracket order.
    pub fn stages(&self) -> Vec<Stage> {
        let first = self.first_stage();

        Stage::ALL.iter().copied().filter(|s| *s >= first).collect()
    }

    pub fn includes(&self, stage: Stage) -> bool {
        stage >= self.first_stage()
    }
}

/// One tournament edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Champion {
    pub id: u32,
    pub name: String,
    pub season: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub starting_round: StartingRound,
    pub logo: Option<String>,
}

impl Champion {
    pub fn builder() -> ChampionBuilder {
        ChampionBuilder::new()
    }

    pub fn includes_stage(&self, stage: Stage) -> bool {
        self.starting_round.includes(stage)
    }

    pub fn is_running_on(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

impl Display for Champion {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} - {}", self.name, self.season)
    }
}
