use crate::error::{CupError, CupResult};
use crate::r#match::TeamSide;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalScorer {
    pub team: TeamSide,
    pub player: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u8>,
    #[serde(default, rename = "isPenalty")]
    pub is_penalty: bool,
}

impl GoalScorer {
    pub fn new(team: TeamSide, player: u32) -> Self {
        GoalScorer {
            team,
            player,
            minute: None,
            is_penalty: false,
        }
    }

    pub fn with_minute(mut self, minute: u8) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn penalty(mut self) -> Self {
        self.is_penalty = true;
        self
    }
}

/// Ordered goal events of one match. Repeat scorers simply appear repeatedly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalLedger {
    entries: Vec<GoalScorer>,
}

impl GoalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<GoalScorer>) -> Self {
        GoalLedger { entries }
    }

    /// Appends a goal. Fails when no player was selected.
    pub fn add_goal(&mut self, team: TeamSide, player: Option<u32>) -> CupResult<&GoalScorer> {
        self.add_detailed_goal(team, player, None, false)
    }

    pub fn add_detailed_goal(
        &mut self,
        team: TeamSide,
        player: Option<u32>,
        minute: Option<u8>,
        is_penalty: bool,
    ) -> CupResult<&GoalScorer> {
        let player = player.ok_or_else(|| CupError::invalid("a goal needs a scorer"))?;

        Ok(self.record(GoalScorer {
            team,
            player,
            minute,
            is_penalty,
        }))
    }

    pub fn record(&mut self, goal: GoalScorer) -> &GoalScorer {
        self.entries.push(goal);

        let idx = self.entries.len() - 1;
        &self.entries[idx]
    }

    /// Removes exactly the entry at `index`, keeping the rest in order.
    pub fn remove_goal(&mut self, index: usize) -> CupResult<GoalScorer> {
        if index >= self.entries.len() {
            return Err(CupError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        Ok(self.entries.remove(index))
    }

    /// Goals per player over the whole match, regardless of team tag.
    pub fn goal_counts(&self) -> HashMap<u32, u32> {
        let mut counts = HashMap::new();

        for goal in &self.entries {
            *counts.entry(goal.player).or_insert(0) += 1;
        }

        counts
    }

    pub fn goals_of(&self, player_id: u32) -> u32 {
        self.entries.iter().filter(|g| g.player == player_id).count() as u32
    }

    pub fn for_side(&self, side: TeamSide) -> Vec<&GoalScorer> {
        self.entries.iter().filter(|g| g.team == side).collect()
    }

    pub fn goals_for(&self, side: TeamSide) -> u32 {
        self.entries.iter().filter(|g| g.team == side).count() as u32
    }

    pub fn entries(&self) -> &[GoalScorer] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
