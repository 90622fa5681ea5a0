use crate::loaders::{ChampionEntity, MatchEntity, TeamEntity};
use crate::{DatabaseEntity, DatabaseError};
use cup_core::{
    Champion, CupError, GoalLedger, GoalScorer, Lineup, ManOfTheMatch, Match, Player,
    PlayerCollection, Team, TournamentStore,
};
use log::info;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds a store from a snapshot, re-validating every entity on the way in.
    pub fn generate(data: &DatabaseEntity) -> Result<TournamentStore, DatabaseError> {
        let mut store = TournamentStore::new();

        for champion in &data.champions {
            store.insert_champion(Self::generate_champion(champion)?)?;
        }

        for team in &data.teams {
            store.insert_team(Self::generate_team(team)?)?;
        }

        for m in &data.matches {
            store.insert_match(Self::generate_match(m))?;
        }

        info!(
            "store generated: {} champion(s), {} team(s), {} match(es)",
            store.champions().len(),
            store.teams(None).len(),
            store.matches(None).len()
        );

        Ok(store)
    }

    fn generate_champion(champion: &ChampionEntity) -> Result<Champion, CupError> {
        Champion::builder()
            .id(champion.id)
            .name(champion.name.clone())
            .season(champion.season.clone())
            .start_date(champion.start_date)
            .end_date(champion.end_date)
            .starting_round(champion.starting_round)
            .logo(champion.logo.clone())
            .build()
            .map_err(CupError::InvalidSelection)
    }

    fn generate_team(team: &TeamEntity) -> Result<Team, CupError> {
        let players = team
            .players
            .iter()
            .map(|player| Player {
                id: player.id,
                name: player.name.clone(),
                position: player.position,
                photo: player.photo.clone(),
                matches_played: player.matches_played,
            })
            .collect();

        let mut lineup = Lineup::new();

        for (slot, player_id) in team.lineup.slots() {
            let Some(player_id) = player_id else {
                continue;
            };

            if lineup.contains(player_id) {
                return Err(CupError::invalid(format!(
                    "team {}: player {} holds more than one slot",
                    team.id, player_id
                )));
            }

            lineup.assign(player_id, slot);
        }

        Team::builder()
            .id(team.id)
            .champion_id(team.champion_id)
            .name(team.name.clone())
            .email(team.email.clone())
            .logo(team.logo.clone())
            .players(PlayerCollection::new(players))
            .lineup(lineup)
            .build()
            .map_err(CupError::InvalidSelection)
    }

    fn generate_match(m: &MatchEntity) -> Match {
        let goals = m
            .goal_scorers
            .iter()
            .map(|goal| GoalScorer {
                team: goal.team,
                player: goal.player,
                minute: goal.minute,
                is_penalty: goal.is_penalty,
            })
            .collect();

        Match {
            id: m.id,
            champion_id: m.champion_id,
            stage: m.stage,
            position: m.position,
            team1: m.team1,
            team2: m.team2,
            score1: m.score1,
            score2: m.score2,
            status: m.status,
            goal_scorers: GoalLedger::from_entries(goals),
            man_of_the_match: m.man_of_the_match.as_ref().map(|motm| ManOfTheMatch {
                player: motm.player,
                team: motm.team,
            }),
            date: m.date,
        }
    }
}
