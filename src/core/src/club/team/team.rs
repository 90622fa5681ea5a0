use crate::club::team::builder::TeamBuilder;
use crate::club::{Lineup, Player, PlayerCollection, PlayerPosition};
use crate::error::{CupError, CupResult, EntityKind};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const MAX_ROSTER_SIZE: usize = 9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub champion_id: u32,
    pub name: String,
    pub email: String,
    pub logo: Option<String>,
    pub players: PlayerCollection,
    pub lineup: Lineup,
}

/// Outcome of a lineup change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAssignment {
    pub player_id: u32,
    pub slot: PlayerPosition,
    pub previous_slot: PlayerPosition,
    pub displaced: Option<u32>,
}

impl Team {
    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn players(&self) -> Vec<&Player> {
        self.players.players()
    }

    pub fn player(&self, player_id: u32) -> CupResult<&Player> {
        self.players
            .get(player_id)
            .ok_or_else(|| CupError::not_found(EntityKind::Player, player_id))
    }

    pub fn player_mut(&mut self, player_id: u32) -> CupResult<&mut Player> {
        self.players
            .get_mut(player_id)
            .ok_or_else(|| CupError::not_found(EntityKind::Player, player_id))
    }

    pub fn has_player(&self, player_id: u32) -> bool {
        self.players.contains(player_id)
    }

    pub fn is_roster_full(&self) -> bool {
        self.players.len() >= MAX_ROSTER_SIZE
    }

    /// Adds a player to the roster. A player created with an on-field position
    /// takes that slot straight away, displacing its holder to the reserves.
    pub fn add_player(&mut self, player: Player) -> CupResult<&Player> {
        if self.is_roster_full() {
            warn!("team {}: roster full, rejecting player {}", self.id, player.name);
            return Err(CupError::RosterFull {
                team_id: self.id,
                limit: MAX_ROSTER_SIZE,
            });
        }

        if player.name.trim().is_empty() {
            return Err(CupError::invalid("player name is required"));
        }

        if self.players.contains(player.id) {
            return Err(CupError::invalid(format!(
                "player {} is already on team {}",
                player.id, self.id
            )));
        }

        let player_id = player.id;
        let position = player.position;

        self.players.add(Player {
            position: PlayerPosition::Reserve,
            ..player
        });

        self.assign_to_slot(player_id, position)?;

        debug!("team {}: added player {} ({})", self.id, player_id, position);

        self.player(player_id)
    }

    /// Removes a player who has never played. Their slot, if any, becomes empty.
    pub fn delete_player(&mut self, player_id: u32) -> CupResult<Player> {
        let player = self.player(player_id)?;

        if player.is_locked() {
            warn!(
                "team {}: player {} has played {} match(es), deletion refused",
                self.id, player_id, player.matches_played
            );
            return Err(CupError::PlayerLocked {
                player_id,
                matches_played: player.matches_played,
            });
        }

        self.lineup.release(player_id);

        let removed = self
            .players
            .take_player(player_id)
            .ok_or_else(|| CupError::not_found(EntityKind::Player, player_id))?;

        debug!("team {}: deleted player {}", self.id, player_id);

        Ok(removed)
    }

    /// Moves a player into `slot`. The player leaves any slot they held and
    /// whoever held `slot` drops to the reserve pool. `Reserve` just benches
    /// the player.
    pub fn assign_to_slot(
        &mut self,
        player_id: u32,
        slot: PlayerPosition,
    ) -> CupResult<SlotAssignment> {
        if !self.has_player(player_id) {
            return Err(CupError::not_found(EntityKind::Player, player_id));
        }

        let previous_slot = self.lineup.slot_of(player_id);
        let displaced = self.lineup.assign(player_id, slot);

        if let Some(displaced_id) = displaced {
            if let Some(displaced_player) = self.players.get_mut(displaced_id) {
                displaced_player.position = PlayerPosition::Reserve;
            }
            debug!(
                "team {}: player {} displaced from {} to reserves",
                self.id, displaced_id, slot
            );
        }

        if let Some(player) = self.players.get_mut(player_id) {
            player.position = slot;
        }

        Ok(SlotAssignment {
            player_id,
            slot,
            previous_slot,
            displaced,
        })
    }

    /// Players not holding any formation slot.
    pub fn reserve_pool(&self) -> Vec<&Player> {
        self.players
            .players
            .iter()
            .filter(|p| !self.lineup.contains(p.id))
            .collect()
    }

    pub fn slot_of(&self, player_id: u32) -> PlayerPosition {
        self.lineup.slot_of(player_id)
    }

    /// Aligns each player's nominal position with the lineup, which is authoritative.
    pub fn sync_positions(&mut self) {
        for player in self.players.players.iter_mut() {
            player.position = self.lineup.slot_of(player.id);
        }
    }
}
