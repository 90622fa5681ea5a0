use chrono::{NaiveDate, NaiveDateTime};
use cup_core::{MatchStatus, PlayerPosition, Stage, StartingRound, TeamSide};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionEntity {
    pub id: u32,
    pub name: String,
    pub season: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub starting_round: StartingRound,
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntity {
    pub id: u32,
    pub champion_id: u32,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub logo: Option<String>,
    #[serde(default)]
    pub players: Vec<PlayerEntity>,
    #[serde(default)]
    pub lineup: LineupEntity,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEntity {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub position: PlayerPosition,
    pub photo: Option<String>,
    #[serde(default)]
    pub matches_played: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct LineupEntity {
    pub goalkeeper: Option<u32>,
    pub leftwing: Option<u32>,
    pub rightwing: Option<u32>,
    pub centerforward: Option<u32>,
    pub leftmidfielder: Option<u32>,
    pub rightmidfielder: Option<u32>,
}

impl LineupEntity {
    pub fn slots(&self) -> [(PlayerPosition, Option<u32>); 6] {
        [
            (PlayerPosition::Goalkeeper, self.goalkeeper),
            (PlayerPosition::LeftWing, self.leftwing),
            (PlayerPosition::RightWing, self.rightwing),
            (PlayerPosition::CenterForward, self.centerforward),
            (PlayerPosition::LeftMidfielder, self.leftmidfielder),
            (PlayerPosition::RightMidfielder, self.rightmidfielder),
        ]
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntity {
    pub id: u32,
    pub champion_id: u32,
    pub stage: Stage,
    pub position: u8,
    pub team1: Option<u32>,
    pub team2: Option<u32>,
    #[serde(default)]
    pub score1: u32,
    #[serde(default)]
    pub score2: u32,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub goal_scorers: Vec<GoalScorerEntity>,
    pub man_of_the_match: Option<ManOfTheMatchEntity>,
    pub date: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalScorerEntity {
    pub team: TeamSide,
    pub player: u32,
    pub minute: Option<u8>,
    #[serde(default)]
    pub is_penalty: bool,
}

#[derive(Debug, Deserialize)]
pub struct ManOfTheMatchEntity {
    pub player: u32,
    pub team: TeamSide,
}
