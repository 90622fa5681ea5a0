use crate::club::PlayerPosition;
use serde::{Deserialize, Serialize};

/// On-field formation of a team: at most one player per slot.
///
/// `Reserve` has no field here, so a reserve can only be expressed as absence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    #[serde(default, rename = "goalkeeper")]
    goalkeeper: Option<u32>,
    #[serde(default, rename = "leftwing")]
    left_wing: Option<u32>,
    #[serde(default, rename = "rightwing")]
    right_wing: Option<u32>,
    #[serde(default, rename = "centerforward")]
    center_forward: Option<u32>,
    #[serde(default, rename = "leftmidfielder")]
    left_midfielder: Option<u32>,
    #[serde(default, rename = "rightmidfielder")]
    right_midfielder: Option<u32>,
}

impl Lineup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: PlayerPosition) -> Option<u32> {
        match slot {
            PlayerPosition::Goalkeeper => self.goalkeeper,
            PlayerPosition::LeftWing => self.left_wing,
            PlayerPosition::RightWing => self.right_wing,
            PlayerPosition::CenterForward => self.center_forward,
            PlayerPosition::LeftMidfielder => self.left_midfielder,
            PlayerPosition::RightMidfielder => self.right_midfielder,
            PlayerPosition::Reserve => None,
        }
    }

    fn slot_mut(&mut self, slot: PlayerPosition) -> Option<&mut Option<u32>> {
        match slot {
            PlayerPosition::Goalkeeper => Some(&mut self.goalkeeper),
            PlayerPosition::LeftWing => Some(&mut self.left_wing),
            PlayerPosition::RightWing => Some(&mut self.right_wing),
            PlayerPosition::CenterForward => Some(&mut self.center_forward),
            PlayerPosition::LeftMidfielder => Some(&mut self.left_midfielder),
            PlayerPosition::RightMidfielder => Some(&mut self.right_midfielder),
            PlayerPosition::Reserve => None,
        }
    }

    /// Slot currently held by `player_id`, or `Reserve`.
    pub fn slot_of(&self, player_id: u32) -> PlayerPosition {
        PlayerPosition::ON_FIELD
            .iter()
            .copied()
            .find(|slot| self.get(*slot) == Some(player_id))
            .unwrap_or(PlayerPosition::Reserve)
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.slot_of(player_id).is_on_field()
    }

    /// Clears every slot holding `player_id`. Returns the slot that was cleared.
    pub fn release(&mut self, player_id: u32) -> Option<PlayerPosition> {
        let mut released = None;

        for slot in PlayerPosition::ON_FIELD {
            if let Some(cell) = self.slot_mut(slot)
                && *cell == Some(player_id)
            {
                *cell = None;
                released = Some(slot);
            }
        }

        released
    }

    /// Puts `player_id` into `slot`, first releasing any slot they already hold.
    /// Returns the player displaced from `slot`, if any.
    ///
    /// Assigning to `Reserve` only releases the player.
    pub fn assign(&mut self, player_id: u32, slot: PlayerPosition) -> Option<u32> {
        self.release(player_id);

        let cell = self.slot_mut(slot)?;
        let displaced = cell.replace(player_id);

        displaced.filter(|id| *id != player_id)
    }

    /// Occupied slots in formation order.
    pub fn assignments(&self) -> Vec<(PlayerPosition, u32)> {
        PlayerPosition::ON_FIELD
            .iter()
            .filter_map(|slot| self.get(*slot).map(|player_id| (*slot, player_id)))
            .collect()
    }

    pub fn is_injective(&self) -> bool {
        let assignments = self.assignments();

        assignments
            .iter()
            .enumerate()
            .all(|(idx, (_, player_id))| {
                assignments[idx + 1..].iter().all(|(_, other)| other != player_id)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_displaces_previous_holder() {
        let mut lineup = Lineup::new();

        assert_eq!(lineup.assign(1, PlayerPosition::Goalkeeper), None);
        assert_eq!(lineup.assign(2, PlayerPosition::Goalkeeper), Some(1));

        assert_eq!(lineup.get(PlayerPosition::Goalkeeper), Some(2));
        assert_eq!(lineup.slot_of(1), PlayerPosition::Reserve);
    }

    #[test]
    fn assign_moves_player_between_slots() {
        let mut lineup = Lineup::new();

        lineup.assign(7, PlayerPosition::LeftWing);
        lineup.assign(7, PlayerPosition::RightWing);

        assert_eq!(lineup.get(PlayerPosition::LeftWing), None);
        assert_eq!(lineup.get(PlayerPosition::RightWing), Some(7));
        assert!(lineup.is_injective());
    }

    #[test]
    fn reassigning_same_slot_displaces_nobody() {
        let mut lineup = Lineup::new();

        lineup.assign(3, PlayerPosition::CenterForward);
        assert_eq!(lineup.assign(3, PlayerPosition::CenterForward), None);
        assert_eq!(lineup.assignments(), vec![(PlayerPosition::CenterForward, 3)]);
    }

    #[test]
    fn reserve_only_releases() {
        let mut lineup = Lineup::new();

        lineup.assign(4, PlayerPosition::LeftMidfielder);
        assert_eq!(lineup.assign(4, PlayerPosition::Reserve), None);
        assert!(!lineup.contains(4));
        assert!(lineup.assignments().is_empty());
    }

    #[test]
    fn lineup_wire_keys_are_compact_slot_names() {
        let mut lineup = Lineup::new();
        lineup.assign(9, PlayerPosition::CenterForward);

        let json = serde_json::to_value(&lineup).unwrap();
        assert_eq!(json["centerforward"], 9);
        assert!(json["goalkeeper"].is_null());

        let parsed: Lineup = serde_json::from_str(r#"{"leftwing": 5}"#).unwrap();
        assert_eq!(parsed.get(PlayerPosition::LeftWing), Some(5));
    }
}
