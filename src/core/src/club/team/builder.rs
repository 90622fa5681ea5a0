use crate::club::{Lineup, PlayerCollection, Team};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    champion_id: Option<u32>,
    name: Option<String>,
    email: Option<String>,
    logo: Option<String>,
    players: Option<PlayerCollection>,
    lineup: Option<Lineup>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn champion_id(mut self, champion_id: u32) -> Self {
        self.champion_id = Some(champion_id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    pub fn logo(mut self, logo: Option<String>) -> Self {
        self.logo = logo;
        self
    }

    pub fn players(mut self, players: PlayerCollection) -> Self {
        self.players = Some(players);
        self
    }

    pub fn lineup(mut self, lineup: Lineup) -> Self {
        self.lineup = Some(lineup);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        Ok(Team {
            id: self.id.ok_or("id is required")?,
            champion_id: self.champion_id.ok_or("champion_id is required")?,
            name: self.name.ok_or("name is required")?,
            email: self.email.unwrap_or_default(),
            logo: self.logo,
            players: self.players.unwrap_or_default(),
            lineup: self.lineup.unwrap_or_default(),
        })
    }
}
