use crate::club::PlayerPosition;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerPosition,
    pub photo: Option<String>,
    pub matches_played: u32,
}

impl Player {
    pub fn new(id: u32, name: String, position: PlayerPosition, photo: Option<String>) -> Self {
        Player {
            id,
            name,
            position,
            photo,
            matches_played: 0,
        }
    }

    /// A player who has appeared in a match can no longer be deleted.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.matches_played > 0
    }

    pub fn record_appearance(&mut self) {
        self.matches_played += 1;
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> Vec<&Player> {
        self.players.iter().collect()
    }

    pub fn get(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn get_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn take_player(&mut self, player_id: u32) -> Option<Player> {
        let player_idx = self.players.iter().position(|p| p.id == player_id)?;

        Some(self.players.remove(player_idx))
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn by_position(&self, position: PlayerPosition) -> Vec<&Player> {
        self.players.iter().filter(|p| p.position == position).collect()
    }
}
