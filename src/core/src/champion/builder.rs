use crate::champion::{Champion, StartingRound};
use chrono::NaiveDate;

#[derive(Default)]
pub struct ChampionBuilder {
    id: Option<u32>,
    name: Option<String>,
    season: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    starting_round: Option<StartingRound>,
    logo: Option<String>,
}

impl ChampionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn season(mut self, season: String) -> Self {
        self.season = Some(season);
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn starting_round(mut self, starting_round: StartingRound) -> Self {
        self.starting_round = Some(starting_round);
        self
    }

    pub fn logo(mut self, logo: Option<String>) -> Self {
        self.logo = logo;
        self
    }

    pub fn build(self) -> Result<Champion, String> {
        let start_date = self.start_date.ok_or("start_date is required")?;
        let end_date = self.end_date.ok_or("end_date is required")?;

        if end_date < start_date {
            return Err(format!("end_date {} is before start_date {}", end_date, start_date));
        }

        Ok(Champion {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            season: self.season.ok_or("season is required")?,
            start_date,
            end_date,
            starting_round: self.starting_round.unwrap_or_default(),
            logo: self.logo,
        })
    }
}
