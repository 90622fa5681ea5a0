use crate::champion::StartingRound;
use crate::club::{Player, PlayerPosition};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct NewChampion {
    pub name: String,
    pub season: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub starting_round: StartingRound,
    pub logo: Option<String>,
}

/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ChampionUpdate {
    pub name: Option<String>,
    pub season: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub starting_round: Option<StartingRound>,
    pub logo: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct NewTeam {
    pub champion_id: u32,
    pub name: String,
    pub email: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub logo: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub position: PlayerPosition,
    pub photo: Option<String>,
}

impl NewPlayer {
    pub fn reserve(name: impl Into<String>) -> Self {
        NewPlayer {
            name: name.into(),
            position: PlayerPosition::Reserve,
            photo: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub photo: Option<Option<String>>,
}

/// A roster entry annotated with the formation slot the player holds.
#[derive(Debug, Clone, Serialize)]
pub struct TeamPlayer<'t> {
    #[serde(flatten)]
    pub player: &'t Player,
    pub slot: PlayerPosition,
}
