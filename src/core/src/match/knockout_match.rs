use crate::bracket::Stage;
use crate::error::{CupError, CupResult};
use crate::r#match::{GoalLedger, GoalScorer, MatchStatus, StatusTransition};
use chrono::NaiveDateTime;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result};

/// Which of the two team slots of a match an event belongs to (`1` or `2` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TeamSide {
    One,
    Two,
}

impl TryFrom<u8> for TeamSide {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(TeamSide::One),
            2 => Ok(TeamSide::Two),
            other => Err(format!("team tag must be 1 or 2, got {}", other)),
        }
    }
}

impl From<TeamSide> for u8 {
    fn from(side: TeamSide) -> Self {
        match side {
            TeamSide::One => 1,
            TeamSide::Two => 2,
        }
    }
}

impl Display for TeamSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Team {}", u8::from(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManOfTheMatch {
    pub player: u32,
    pub team: TeamSide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u32,
    pub champion_id: u32,
    pub stage: Stage,
    pub position: u8,
    pub team1: Option<u32>,
    pub team2: Option<u32>,
    pub score1: u32,
    pub score2: u32,
    pub status: MatchStatus,
    pub goal_scorers: GoalLedger,
    pub man_of_the_match: Option<ManOfTheMatch>,
    pub date: NaiveDateTime,
}

impl Match {
    pub fn new(id: u32, champion_id: u32, stage: Stage, position: u8, date: NaiveDateTime) -> Self {
        Match {
            id,
            champion_id,
            stage,
            position,
            team1: None,
            team2: None,
            score1: 0,
            score2: 0,
            status: MatchStatus::NotStarted,
            goal_scorers: GoalLedger::new(),
            man_of_the_match: None,
            date,
        }
    }

    pub fn team_id(&self, side: TeamSide) -> Option<u32> {
        match side {
            TeamSide::One => self.team1,
            TeamSide::Two => self.team2,
        }
    }

    pub fn side_of(&self, team_id: u32) -> Option<TeamSide> {
        if self.team1 == Some(team_id) {
            Some(TeamSide::One)
        } else if self.team2 == Some(team_id) {
            Some(TeamSide::Two)
        } else {
            None
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.side_of(team_id).is_some()
    }

    /// Both team slots are filled.
    pub fn is_ready(&self) -> bool {
        self.team1.is_some() && self.team2.is_some()
    }

    pub fn set_teams(&mut self, team1: Option<u32>, team2: Option<u32>) -> CupResult<()> {
        if let (Some(first), Some(second)) = (team1, team2) {
            if first == second {
                return Err(CupError::invalid(format!(
                    "team {} cannot play against itself",
                    first
                )));
            }
        }

        self.team1 = team1;
        self.team2 = team2;

        Ok(())
    }

    /// Clears a team from whichever slot it holds, turning that slot back to TBD.
    pub fn clear_team(&mut self, team_id: u32) -> bool {
        match self.side_of(team_id) {
            Some(TeamSide::One) => {
                self.team1 = None;
                true
            }
            Some(TeamSide::Two) => {
                self.team2 = None;
                true
            }
            None => false,
        }
    }

    pub fn set_score(&mut self, score1: u32, score2: u32) {
        self.score1 = score1;
        self.score2 = score2;
    }

    /// Goals or a man-of-the-match award are recorded against `side`.
    pub fn has_events_for(&self, side: TeamSide) -> bool {
        self.goal_scorers.goals_for(side) > 0
            || self.man_of_the_match.is_some_and(|motm| motm.team == side)
    }

    /// Moves the match to `status`. Every transition is permitted; it does not
    /// gate score or goal edits.
    pub fn transition(&mut self, status: MatchStatus) -> StatusTransition {
        let transition = StatusTransition::new(self.status, status);

        if transition.is_correction() {
            warn!("match {}: status corrected {}", self.id, transition);
        } else {
            debug!("match {}: status {}", self.id, transition);
        }

        self.status = status;

        transition
    }

    pub fn add_goal(&mut self, team: TeamSide, player: Option<u32>) -> CupResult<&GoalScorer> {
        self.goal_scorers.add_goal(team, player)
    }

    pub fn remove_goal(&mut self, index: usize) -> CupResult<GoalScorer> {
        self.goal_scorers.remove_goal(index)
    }

    pub fn goal_counts(&self) -> HashMap<u32, u32> {
        self.goal_scorers.goal_counts()
    }

    pub fn set_man_of_the_match(&mut self, man_of_the_match: Option<ManOfTheMatch>) {
        self.man_of_the_match = man_of_the_match;
    }

    /// Side with the higher score once the match has ended.
    pub fn winner(&self) -> Option<TeamSide> {
        if self.status != MatchStatus::Ended {
            return None;
        }

        match self.score1.cmp(&self.score2) {
            std::cmp::Ordering::Greater => Some(TeamSide::One),
            std::cmp::Ordering::Less => Some(TeamSide::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn winner_team_id(&self) -> Option<u32> {
        self.winner().and_then(|side| self.team_id(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn new_match_is_tbd_and_not_started() {
        let m = generate_test_match();

        assert_eq!(m.status, MatchStatus::NotStarted);
        assert!(!m.is_ready());
        assert_eq!(m.score1, 0);
        assert!(m.goal_scorers.is_empty());
    }

    #[test]
    fn transitions_are_permissive() {
        let mut m = generate_test_match();

        m.transition(MatchStatus::Ended);
        let back = m.transition(MatchStatus::NotStarted);

        assert!(back.is_correction());
        assert_eq!(m.status, MatchStatus::NotStarted);
    }

    #[test]
    fn team_cannot_face_itself() {
        let mut m = generate_test_match();

        assert!(m.set_teams(Some(4), Some(4)).is_err());
        assert_eq!(m.team1, None);

        m.set_teams(Some(4), Some(5)).unwrap();
        assert_eq!(m.side_of(5), Some(TeamSide::Two));
        assert!(m.clear_team(4));
        assert_eq!(m.team1, None);
    }

    #[test]
    fn winner_only_after_end() {
        let mut m = generate_test_match();
        m.set_teams(Some(1), Some(2)).unwrap();
        m.set_score(1, 3);

        assert_eq!(m.winner(), None);

        m.transition(MatchStatus::Ended);
        assert_eq!(m.winner(), Some(TeamSide::Two));
        assert_eq!(m.winner_team_id(), Some(2));

        m.set_score(2, 2);
        assert_eq!(m.winner(), None);
    }

    #[test]
    fn events_are_tracked_per_side() {
        let mut m = generate_test_match();
        m.set_teams(Some(1), Some(2)).unwrap();

        m.add_goal(TeamSide::One, Some(10)).unwrap();
        assert!(m.has_events_for(TeamSide::One));
        assert!(!m.has_events_for(TeamSide::Two));

        m.set_man_of_the_match(Some(ManOfTheMatch { player: 20, team: TeamSide::Two }));
        assert!(m.has_events_for(TeamSide::Two));
    }

    #[test]
    fn goal_scorer_team_tag_is_numeric_on_the_wire() {
        let mut m = generate_test_match();
        m.add_goal(TeamSide::Two, Some(8)).unwrap();

        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["goalScorers"][0]["team"], 2);
        assert_eq!(json["stage"], "semi");

        let tag: std::result::Result<TeamSide, _> = serde_json::from_str("3");
        assert!(tag.is_err());
    }

    fn generate_test_match() -> Match {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();

        Match::new(1, 1, Stage::Semifinal, 1, date)
    }
}
