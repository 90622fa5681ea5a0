use crate::bracket::Stage;
use crate::champion::Champion;
use crate::error::{CupError, CupResult};
use crate::r#match::Match;
use chrono::NaiveDateTime;
use itertools::Itertools;
use log::{debug, warn};

/// Matches of one stage, ordered by bracket position.
#[derive(Debug, Clone)]
pub struct BracketRound<'m> {
    pub stage: Stage,
    pub matches: Vec<&'m Match>,
}

impl BracketRound<'_> {
    pub fn title(&self) -> &'static str {
        self.stage.title()
    }

    pub fn is_full(&self) -> bool {
        self.matches.len() >= self.stage.capacity() as usize
    }

    pub fn free_slots(&self) -> usize {
        (self.stage.capacity() as usize).saturating_sub(self.matches.len())
    }
}

pub struct BracketBuilder;

impl BracketBuilder {
    /// Groups a champion's matches into rounds in bracket order. The Round of 16
    /// is left out entirely for champions starting at the quarterfinals.
    pub fn build_rounds<'m>(champion: &Champion, matches: &'m [Match]) -> Vec<BracketRound<'m>> {
        champion
            .starting_round
            .stages()
            .into_iter()
            .map(|stage| BracketRound {
                stage,
                matches: matches
                    .iter()
                    .filter(|m| m.champion_id == champion.id && m.stage == stage)
                    .sorted_by_key(|m| m.position)
                    .collect(),
            })
            .collect()
    }

    /// Position for the next match of `stage`: one past the current count, or
    /// the lowest free position when that one is taken after a deletion.
    pub fn next_position(stage: Stage, existing: &[Match]) -> CupResult<u8> {
        Self::allocate_position(stage, existing.iter())
    }

    fn allocate_position<'m>(
        stage: Stage,
        existing: impl Iterator<Item = &'m Match>,
    ) -> CupResult<u8> {
        let taken: Vec<u8> = existing
            .filter(|m| m.stage == stage)
            .map(|m| m.position)
            .collect();

        let capacity = stage.capacity();

        if taken.len() >= capacity as usize {
            return Err(CupError::CapacityExceeded { stage, capacity });
        }

        let candidate = taken.len() as u8 + 1;
        if !taken.contains(&candidate) {
            return Ok(candidate);
        }

        (1..=capacity)
            .find(|position| !taken.contains(position))
            .ok_or(CupError::CapacityExceeded { stage, capacity })
    }

    pub fn can_add(stage: Stage, existing: &[Match]) -> bool {
        Self::next_position(stage, existing).is_ok()
    }

    /// Appends a new TBD match to the champion's collection. On failure the
    /// collection is left unchanged.
    pub fn add_match<'m>(
        champion: &Champion,
        matches: &'m mut Vec<Match>,
        id: u32,
        stage: Stage,
        date: NaiveDateTime,
    ) -> CupResult<&'m Match> {
        if !champion.includes_stage(stage) {
            warn!("champion {}: {} is not part of the bracket", champion.id, stage);
            return Err(CupError::StageUnavailable { stage });
        }

        let position = Self::allocate_position(
            stage,
            matches.iter().filter(|m| m.champion_id == champion.id),
        )?;

        matches.push(Match::new(id, champion.id, stage, position, date));

        debug!(
            "champion {}: added match {} at {} #{}",
            champion.id, id, stage.code(), position
        );

        let idx = matches.len() - 1;
        Ok(&matches[idx])
    }

    /// Checks a champion's matches against stage capacities, position bounds
    /// and uniqueness, and the starting round.
    pub fn validate(champion: &Champion, matches: &[Match]) -> CupResult<()> {
        let champion_matches = matches.iter().filter(|m| m.champion_id == champion.id);

        for (stage, group) in &champion_matches
            .sorted_by_key(|m| m.stage)
            .chunk_by(|m| m.stage)
        {
            if !champion.includes_stage(stage) {
                return Err(CupError::StageUnavailable { stage });
            }

            let positions: Vec<u8> = group.map(|m| m.position).collect();
            let capacity = stage.capacity();

            if positions.len() > capacity as usize {
                return Err(CupError::CapacityExceeded { stage, capacity });
            }

            if let Some(position) = positions.iter().find(|p| **p == 0 || **p > capacity) {
                return Err(CupError::invalid(format!(
                    "{} position {} is outside 1..={}",
                    stage, position, capacity
                )));
            }

            if let Some(position) = positions.iter().duplicates().next() {
                return Err(CupError::invalid(format!(
                    "{} position {} is used twice",
                    stage, position
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::champion::StartingRound;
    use chrono::NaiveDate;

    #[test]
    fn empty_round_of_16_bracket_has_four_empty_rounds() {
        let champion = generate_test_champion(StartingRound::RoundOf16);

        let rounds = BracketBuilder::build_rounds(&champion, &[]);

        let stages: Vec<Stage> = rounds.iter().map(|r| r.stage).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
        assert!(rounds.iter().all(|r| r.matches.is_empty()));
    }

    #[test]
    fn quarterfinal_champion_never_shows_round_of_16() {
        let champion = generate_test_champion(StartingRound::Quarterfinal);
        let matches = vec![
            generate_test_match(1, Stage::RoundOf16, 1),
            generate_test_match(2, Stage::Quarterfinal, 1),
        ];

        let rounds = BracketBuilder::build_rounds(&champion, &matches);

        assert_eq!(rounds.len(), 3);
        assert!(rounds.iter().all(|r| r.stage != Stage::RoundOf16));
        assert_eq!(rounds[0].matches.len(), 1);
    }

    #[test]
    fn rounds_are_sorted_by_position() {
        let champion = generate_test_champion(StartingRound::RoundOf16);
        let matches = vec![
            generate_test_match(1, Stage::Quarterfinal, 3),
            generate_test_match(2, Stage::Quarterfinal, 1),
            generate_test_match(3, Stage::Final, 1),
            generate_test_match(4, Stage::Quarterfinal, 2),
        ];

        let rounds = BracketBuilder::build_rounds(&champion, &matches);

        let ids: Vec<u32> = rounds[1].matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);
        assert_eq!(rounds[3].matches.len(), 1);
        assert!(rounds[3].is_full());
    }

    #[test]
    fn next_position_counts_stage_matches() {
        let matches = vec![
            generate_test_match(1, Stage::Semifinal, 1),
            generate_test_match(2, Stage::Final, 1),
        ];

        assert_eq!(BracketBuilder::next_position(Stage::Semifinal, &matches), Ok(2));
        assert_eq!(BracketBuilder::next_position(Stage::RoundOf16, &matches), Ok(1));
        assert_eq!(
            BracketBuilder::next_position(Stage::Final, &matches),
            Err(CupError::CapacityExceeded { stage: Stage::Final, capacity: 1 })
        );
    }

    #[test]
    fn next_position_fills_gap_left_by_deletion() {
        let matches = vec![
            generate_test_match(1, Stage::Quarterfinal, 2),
            generate_test_match(2, Stage::Quarterfinal, 3),
        ];

        assert_eq!(BracketBuilder::next_position(Stage::Quarterfinal, &matches), Ok(1));
    }

    #[test]
    fn add_match_stops_at_capacity_without_changes() {
        let champion = generate_test_champion(StartingRound::RoundOf16);
        let mut matches = Vec::new();

        for id in 1..=4 {
            BracketBuilder::add_match(&champion, &mut matches, id, Stage::Quarterfinal, test_date())
                .unwrap();
        }

        let result =
            BracketBuilder::add_match(&champion, &mut matches, 5, Stage::Quarterfinal, test_date());

        assert!(matches!(result, Err(CupError::CapacityExceeded { capacity: 4, .. })));
        assert_eq!(matches.len(), 4);
        let positions: Vec<u8> = matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn add_round_of_16_match_to_quarterfinal_champion_fails() {
        let champion = generate_test_champion(StartingRound::Quarterfinal);
        let mut matches = Vec::new();

        let result =
            BracketBuilder::add_match(&champion, &mut matches, 1, Stage::RoundOf16, test_date());

        assert_eq!(result.unwrap_err(), CupError::StageUnavailable { stage: Stage::RoundOf16 });
        assert!(matches.is_empty());
    }

    #[test]
    fn validate_rejects_duplicate_positions() {
        let champion = generate_test_champion(StartingRound::RoundOf16);
        let matches = vec![
            generate_test_match(1, Stage::Semifinal, 1),
            generate_test_match(2, Stage::Semifinal, 1),
        ];

        assert!(matches!(
            BracketBuilder::validate(&champion, &matches),
            Err(CupError::InvalidSelection(_))
        ));
    }

    #[test]
    fn validate_rejects_round_of_16_for_quarterfinal_start() {
        let champion = generate_test_champion(StartingRound::Quarterfinal);
        let matches = vec![generate_test_match(1, Stage::RoundOf16, 1)];

        assert_eq!(
            BracketBuilder::validate(&champion, &matches),
            Err(CupError::StageUnavailable { stage: Stage::RoundOf16 })
        );
    }

    fn test_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 12)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    fn generate_test_champion(starting_round: StartingRound) -> Champion {
        Champion::builder()
            .id(1)
            .name("Test Cup".to_string())
            .season("2025".to_string())
            .start_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .end_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
            .starting_round(starting_round)
            .build()
            .unwrap()
    }

    fn generate_test_match(id: u32, stage: Stage, position: u8) -> Match {
        Match::new(id, 1, stage, position, test_date())
    }
}
