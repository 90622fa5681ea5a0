use crate::r#match::Match;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub const TOP_SCORERS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerStat {
    pub player_id: u32,
    /// Team the player scored for in the most recently processed match.
    pub team_id: Option<u32>,
    pub goals: u32,
    /// Distinct matches in which the player scored.
    pub matches_played: u32,
}

pub struct TopScorerAggregator;

impl TopScorerAggregator {
    /// Ranks scorers across `matches` by goals, keeping first-encounter order
    /// between equal totals, and keeps the top ten.
    pub fn aggregate<'m>(matches: impl IntoIterator<Item = &'m Match>) -> Vec<ScorerStat> {
        let mut stats = Self::collect(matches);

        stats.sort_by(|a, b| b.goals.cmp(&a.goals));
        stats.truncate(TOP_SCORERS_LIMIT);

        stats
    }

    /// Per-player totals in first-encounter order, without ranking.
    pub fn collect<'m>(matches: impl IntoIterator<Item = &'m Match>) -> Vec<ScorerStat> {
        let mut stats: Vec<ScorerStat> = Vec::new();
        let mut index: HashMap<u32, usize> = HashMap::new();

        for m in matches {
            let mut scored_here: HashSet<u32> = HashSet::new();

            for goal in m.goal_scorers.entries() {
                let idx = *index.entry(goal.player).or_insert_with(|| {
                    stats.push(ScorerStat {
                        player_id: goal.player,
                        team_id: None,
                        goals: 0,
                        matches_played: 0,
                    });
                    stats.len() - 1
                });

                let stat = &mut stats[idx];

                stat.goals += 1;
                stat.team_id = m.team_id(goal.team);

                if scored_here.insert(goal.player) {
                    stat.matches_played += 1;
                }
            }
        }

        stats
    }
}
