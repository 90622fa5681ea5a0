use crate::bracket::{BracketBuilder, BracketRound, Stage};
use crate::champion::{Champion, StartingRound};
use crate::club::{Player, PlayerPosition, SlotAssignment, Team, MAX_ROSTER_SIZE};
use crate::error::{CupError, CupResult, EntityKind};
use crate::r#match::{GoalScorer, ManOfTheMatch, Match, MatchStatus, StatusTransition, TeamSide};
use crate::schedule::FixtureCalendar;
use crate::statistics::{ScorerStat, TopScorerAggregator};
use crate::store::{
    ChampionUpdate, NewChampion, NewPlayer, NewTeam, PlayerUpdate, TeamPlayer, TeamUpdate,
};
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use serde::Serialize;

/// In-memory tournament state. Every mutating operation validates first and
/// commits only on success, so a failed call leaves the store as it was.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TournamentStore {
    champions: Vec<Champion>,
    teams: Vec<Team>,
    matches: Vec<Match>,
    #[serde(skip)]
    last_id: u32,
}

impl TournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn peek_id(&self) -> CupResult<u32> {
        self.last_id.checked_add(1).ok_or(CupError::IdsExhausted)
    }

    fn reserve_id(&mut self, id: u32) {
        self.last_id = self.last_id.max(id);
    }

    fn champion_index(&self, id: u32) -> CupResult<usize> {
        self.champions
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CupError::not_found(EntityKind::Champion, id))
    }

    fn team_index(&self, id: u32) -> CupResult<usize> {
        self.teams
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CupError::not_found(EntityKind::Team, id))
    }

    fn match_index(&self, id: u32) -> CupResult<usize> {
        self.matches
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| CupError::not_found(EntityKind::Match, id))
    }

    /// Runs `f` on a copy of the team and keeps the copy only if `f` succeeds.
    fn modify_team<T>(
        &mut self,
        team_id: u32,
        f: impl FnOnce(&mut Team) -> CupResult<T>,
    ) -> CupResult<T> {
        let idx = self.team_index(team_id)?;
        let mut working = self.teams[idx].clone();

        let outcome = f(&mut working)?;
        self.teams[idx] = working;

        Ok(outcome)
    }

    fn modify_match<T>(
        &mut self,
        match_id: u32,
        f: impl FnOnce(&mut Match) -> CupResult<T>,
    ) -> CupResult<T> {
        let idx = self.match_index(match_id)?;
        let mut working = self.matches[idx].clone();

        let outcome = f(&mut working)?;
        self.matches[idx] = working;

        Ok(outcome)
    }

    // Fetch

    pub fn champions(&self) -> &[Champion] {
        &self.champions
    }

    pub fn champion(&self, id: u32) -> CupResult<&Champion> {
        self.champion_index(id).map(|idx| &self.champions[idx])
    }

    pub fn teams(&self, champion_id: Option<u32>) -> Vec<&Team> {
        self.teams
            .iter()
            .filter(|t| champion_id.is_none_or(|id| t.champion_id == id))
            .collect()
    }

    pub fn team(&self, id: u32) -> CupResult<&Team> {
        self.team_index(id).map(|idx| &self.teams[idx])
    }

    pub fn matches(&self, champion_id: Option<u32>) -> Vec<&Match> {
        self.matches
            .iter()
            .filter(|m| champion_id.is_none_or(|id| m.champion_id == id))
            .collect()
    }

    pub fn match_by_id(&self, id: u32) -> CupResult<&Match> {
        self.match_index(id).map(|idx| &self.matches[idx])
    }

    /// Roster of a team, each player tagged with the slot they hold.
    pub fn team_players(&self, team_id: u32) -> CupResult<Vec<TeamPlayer<'_>>> {
        let team = self.team(team_id)?;

        Ok(team
            .players
            .players
            .iter()
            .map(|player| TeamPlayer {
                player,
                slot: team.slot_of(player.id),
            })
            .collect())
    }

    pub fn find_player(&self, player_id: u32) -> Option<(&Team, &Player)> {
        self.teams
            .iter()
            .find_map(|t| t.players.get(player_id).map(|p| (t, p)))
    }

    // Snapshot loading

    pub fn insert_champion(&mut self, champion: Champion) -> CupResult<&Champion> {
        if self.champions.iter().any(|c| c.id == champion.id) {
            return Err(CupError::invalid(format!(
                "champion id {} is used twice",
                champion.id
            )));
        }

        let id = champion.id;

        self.reserve_id(id);
        self.champions.push(champion);

        self.champion(id)
    }

    /// Adds a team read from a snapshot. Nominal positions are re-derived from
    /// the lineup.
    pub fn insert_team(&mut self, mut team: Team) -> CupResult<&Team> {
        self.champion(team.champion_id)?;

        if self.teams.iter().any(|t| t.id == team.id) {
            return Err(CupError::invalid(format!("team id {} is used twice", team.id)));
        }

        if team.players.len() > MAX_ROSTER_SIZE {
            return Err(CupError::RosterFull {
                team_id: team.id,
                limit: MAX_ROSTER_SIZE,
            });
        }

        if !team.lineup.is_injective() {
            return Err(CupError::invalid(format!(
                "team {} has a player in more than one slot",
                team.id
            )));
        }

        if let Some((slot, player_id)) = team
            .lineup
            .assignments()
            .into_iter()
            .find(|(_, player_id)| !team.has_player(*player_id))
        {
            return Err(CupError::invalid(format!(
                "team {}: {} holds player {} who is not on the roster",
                team.id, slot, player_id
            )));
        }

        for player in &team.players.players {
            if self.find_player(player.id).is_some()
                || team.players.players.iter().filter(|p| p.id == player.id).count() > 1
            {
                return Err(CupError::invalid(format!(
                    "player id {} is used twice",
                    player.id
                )));
            }
        }

        team.sync_positions();

        let id = team.id;
        let max_player_id = team.players.players.iter().map(|p| p.id).max().unwrap_or(0);

        self.reserve_id(id.max(max_player_id));
        self.teams.push(team);

        self.team(id)
    }

    pub fn insert_match(&mut self, m: Match) -> CupResult<&Match> {
        if self.matches.iter().any(|existing| existing.id == m.id) {
            return Err(CupError::invalid(format!("match id {} is used twice", m.id)));
        }

        let champion = self.champion(m.champion_id)?;

        let mut candidate: Vec<Match> = self
            .matches
            .iter()
            .filter(|existing| existing.champion_id == m.champion_id)
            .cloned()
            .collect();
        candidate.push(m.clone());

        BracketBuilder::validate(champion, &candidate)?;

        if m.team1.is_some() && m.team1 == m.team2 {
            return Err(CupError::invalid(format!(
                "match {} has the same team on both sides",
                m.id
            )));
        }

        for team_id in [m.team1, m.team2].into_iter().flatten() {
            self.ensure_team_in_champion(team_id, m.champion_id)?;
        }

        self.ensure_match_rosters(&m)?;

        let id = m.id;

        self.reserve_id(id);
        self.matches.push(m);

        self.match_by_id(id)
    }

    // Champions

    pub fn create_champion(&mut self, request: NewChampion) -> CupResult<&Champion> {
        if request.name.trim().is_empty() {
            return Err(CupError::invalid("champion name is required"));
        }

        let id = self.peek_id()?;

        let champion = Champion::builder()
            .id(id)
            .name(request.name)
            .season(request.season)
            .start_date(request.start_date)
            .end_date(request.end_date)
            .starting_round(request.starting_round)
            .logo(request.logo)
            .build()
            .map_err(CupError::InvalidSelection)?;

        info!("created champion {} ({})", champion, id);

        self.reserve_id(id);
        self.champions.push(champion);

        self.champion(id)
    }

    pub fn update_champion(&mut self, id: u32, update: ChampionUpdate) -> CupResult<&Champion> {
        let idx = self.champion_index(id)?;
        let mut working = self.champions[idx].clone();

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(CupError::invalid("champion name is required"));
            }
            working.name = name;
        }
        if let Some(season) = update.season {
            working.season = season;
        }
        if let Some(start_date) = update.start_date {
            working.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            working.end_date = end_date;
        }
        if let Some(starting_round) = update.starting_round {
            working.starting_round = starting_round;
        }
        if let Some(logo) = update.logo {
            working.logo = logo;
        }

        if working.end_date < working.start_date {
            return Err(CupError::invalid(format!(
                "end_date {} is before start_date {}",
                working.end_date, working.start_date
            )));
        }

        if working.starting_round == StartingRound::Quarterfinal
            && self
                .matches
                .iter()
                .any(|m| m.champion_id == id && m.stage == Stage::RoundOf16)
        {
            warn!("champion {}: round of 16 matches still exist", id);
            return Err(CupError::StageUnavailable {
                stage: Stage::RoundOf16,
            });
        }

        self.champions[idx] = working;

        debug!("updated champion {}", id);

        self.champion(id)
    }

    /// Removes a champion with all of its teams and matches.
    pub fn delete_champion(&mut self, id: u32) -> CupResult<Champion> {
        let idx = self.champion_index(id)?;
        let champion = self.champions.remove(idx);

        let teams_before = self.teams.len();
        let matches_before = self.matches.len();

        self.teams.retain(|t| t.champion_id != id);
        self.matches.retain(|m| m.champion_id != id);

        info!(
            "deleted champion {} with {} team(s) and {} match(es)",
            champion,
            teams_before - self.teams.len(),
            matches_before - self.matches.len()
        );

        Ok(champion)
    }

    // Teams

    pub fn create_team(&mut self, request: NewTeam) -> CupResult<&Team> {
        self.champion(request.champion_id)?;

        if request.name.trim().is_empty() {
            return Err(CupError::invalid("team name is required"));
        }

        let id = self.peek_id()?;

        let team = Team::builder()
            .id(id)
            .champion_id(request.champion_id)
            .name(request.name)
            .email(request.email)
            .logo(request.logo)
            .build()
            .map_err(CupError::InvalidSelection)?;

        info!("champion {}: created team {} ({})", team.champion_id, team.name, id);

        self.reserve_id(id);
        self.teams.push(team);

        self.team(id)
    }

    pub fn update_team(&mut self, id: u32, update: TeamUpdate) -> CupResult<&Team> {
        self.modify_team(id, |team| {
            if let Some(name) = update.name {
                if name.trim().is_empty() {
                    return Err(CupError::invalid("team name is required"));
                }
                team.name = name;
            }
            if let Some(email) = update.email {
                team.email = email;
            }
            if let Some(logo) = update.logo {
                team.logo = logo;
            }
            Ok(())
        })?;

        self.team(id)
    }

    /// Removes a team. Matches it was drawn into fall back to TBD on its side.
    /// Refused while any of those matches has goals or awards for that side.
    pub fn delete_team(&mut self, id: u32) -> CupResult<Team> {
        let idx = self.team_index(id)?;

        if let Some(m) = self
            .matches
            .iter()
            .filter(|m| m.involves(id))
            .find(|m| m.side_of(id).is_some_and(|side| m.has_events_for(side)))
        {
            warn!("team {}: has recorded events in match {}, deletion refused", id, m.id);
            return Err(CupError::invalid(format!(
                "team {} has goals or awards recorded in match {}",
                self.teams[idx].name, m.id
            )));
        }

        let team = self.teams.remove(idx);

        let cleared = self
            .matches
            .iter_mut()
            .map(|m| m.clear_team(id))
            .filter(|cleared| *cleared)
            .count();

        info!("deleted team {} ({}), cleared {} match slot(s)", team.name, id, cleared);

        Ok(team)
    }

    // Matches

    pub fn create_match(
        &mut self,
        champion_id: u32,
        stage: Stage,
        date: NaiveDateTime,
    ) -> CupResult<&Match> {
        let champion_idx = self.champion_index(champion_id)?;
        let id = self.peek_id()?;

        BracketBuilder::add_match(&self.champions[champion_idx], &mut self.matches, id, stage, date)?;

        self.reserve_id(id);

        self.match_by_id(id)
    }

    pub fn can_add_match(&self, champion_id: u32, stage: Stage) -> CupResult<bool> {
        let champion = self.champion(champion_id)?;

        if !champion.includes_stage(stage) {
            return Ok(false);
        }

        let existing: Vec<Match> = self
            .matches
            .iter()
            .filter(|m| m.champion_id == champion_id)
            .cloned()
            .collect();

        Ok(BracketBuilder::can_add(stage, &existing))
    }

    /// Draws teams into a match. Both must belong to the match's champion, and
    /// goals or awards already recorded must still point at the new rosters.
    pub fn update_match_teams(
        &mut self,
        match_id: u32,
        team1: Option<u32>,
        team2: Option<u32>,
    ) -> CupResult<&Match> {
        let idx = self.match_index(match_id)?;
        let mut working = self.matches[idx].clone();

        for team_id in [team1, team2].into_iter().flatten() {
            self.ensure_team_in_champion(team_id, working.champion_id)?;
        }

        working.set_teams(team1, team2)?;

        if let Err(e) = self.ensure_match_rosters(&working) {
            warn!("match {}: team change refused, recorded events no longer fit: {}", match_id, e);
            return Err(e);
        }

        self.matches[idx] = working;

        debug!("match {}: teams {:?} vs {:?}", match_id, team1, team2);

        self.match_by_id(match_id)
    }

    pub fn update_match_score(&mut self, match_id: u32, score1: u32, score2: u32) -> CupResult<&Match> {
        self.modify_match(match_id, |m| {
            m.set_score(score1, score2);
            Ok(())
        })?;

        debug!("match {}: score {}-{}", match_id, score1, score2);

        self.match_by_id(match_id)
    }

    pub fn update_match_date(&mut self, match_id: u32, date: NaiveDateTime) -> CupResult<&Match> {
        self.modify_match(match_id, |m| {
            m.date = date;
            Ok(())
        })?;

        self.match_by_id(match_id)
    }

    pub fn update_match_status(
        &mut self,
        match_id: u32,
        status: MatchStatus,
    ) -> CupResult<StatusTransition> {
        self.modify_match(match_id, |m| Ok(m.transition(status)))
    }

    pub fn delete_match(&mut self, match_id: u32) -> CupResult<Match> {
        let idx = self.match_index(match_id)?;
        let removed = self.matches.remove(idx);

        info!(
            "deleted match {} ({} #{})",
            match_id,
            removed.stage.code(),
            removed.position
        );

        Ok(removed)
    }

    /// Deletes every match of a champion, returning how many were removed.
    pub fn reset_bracket(&mut self, champion_id: u32) -> CupResult<usize> {
        self.champion(champion_id)?;

        let before = self.matches.len();
        self.matches.retain(|m| m.champion_id != champion_id);
        let removed = before - self.matches.len();

        info!("champion {}: bracket reset, {} match(es) removed", champion_id, removed);

        Ok(removed)
    }

    // Goals

    /// Records a goal for `side`. The scorer must be on that side's roster.
    pub fn add_goal_scorer(
        &mut self,
        match_id: u32,
        side: TeamSide,
        player: Option<u32>,
        minute: Option<u8>,
        is_penalty: bool,
    ) -> CupResult<&Match> {
        let m = self.match_by_id(match_id)?;

        if let Some(player_id) = player {
            self.ensure_on_roster(m, side, player_id)?;
        }

        self.modify_match(match_id, |m| {
            m.goal_scorers
                .add_detailed_goal(side, player, minute, is_penalty)
                .map(|_| ())
        })?;

        debug!("match {}: goal for {} by {:?}", match_id, side, player);

        self.match_by_id(match_id)
    }

    pub fn remove_goal_scorer(&mut self, match_id: u32, index: usize) -> CupResult<GoalScorer> {
        let removed = self.modify_match(match_id, |m| m.remove_goal(index))?;

        debug!("match {}: removed goal #{} by {}", match_id, index, removed.player);

        Ok(removed)
    }

    pub fn set_man_of_the_match(
        &mut self,
        match_id: u32,
        man_of_the_match: Option<ManOfTheMatch>,
    ) -> CupResult<&Match> {
        let m = self.match_by_id(match_id)?;

        if let Some(motm) = man_of_the_match {
            self.ensure_on_roster(m, motm.team, motm.player)?;
        }

        self.modify_match(match_id, |m| {
            m.set_man_of_the_match(man_of_the_match);
            Ok(())
        })?;

        self.match_by_id(match_id)
    }

    fn ensure_team_in_champion(&self, team_id: u32, champion_id: u32) -> CupResult<()> {
        let team = self.team(team_id)?;

        if team.champion_id != champion_id {
            return Err(CupError::invalid(format!(
                "team {} belongs to champion {}, not {}",
                team.name, team.champion_id, champion_id
            )));
        }

        Ok(())
    }

    /// Every goal scorer and the man of the match belong to the roster of the
    /// side they are tagged with.
    fn ensure_match_rosters(&self, m: &Match) -> CupResult<()> {
        for goal in m.goal_scorers.entries() {
            self.ensure_on_roster(m, goal.team, goal.player)?;
        }

        if let Some(motm) = m.man_of_the_match {
            self.ensure_on_roster(m, motm.team, motm.player)?;
        }

        Ok(())
    }

    fn ensure_on_roster(&self, m: &Match, side: TeamSide, player_id: u32) -> CupResult<()> {
        let team_id = m.team_id(side).ok_or_else(|| {
            CupError::invalid(format!("{} of match {} is still TBD", side, m.id))
        })?;

        let team = self.team(team_id)?;

        if !team.has_player(player_id) {
            return Err(CupError::invalid(format!(
                "player {} is not on the roster of {}",
                player_id, team.name
            )));
        }

        Ok(())
    }

    // Players

    pub fn add_player(&mut self, team_id: u32, request: NewPlayer) -> CupResult<Player> {
        let id = self.peek_id()?;
        let player = Player::new(id, request.name, request.position, request.photo);

        let added = self.modify_team(team_id, |team| team.add_player(player).cloned())?;

        self.reserve_id(id);

        info!("team {}: added player {}", team_id, added);

        Ok(added)
    }

    pub fn update_player(
        &mut self,
        team_id: u32,
        player_id: u32,
        update: PlayerUpdate,
    ) -> CupResult<Player> {
        self.modify_team(team_id, |team| {
            let player = team.player_mut(player_id)?;

            if let Some(name) = update.name {
                if name.trim().is_empty() {
                    return Err(CupError::invalid("player name is required"));
                }
                player.name = name;
            }
            if let Some(photo) = update.photo {
                player.photo = photo;
            }

            Ok(player.clone())
        })
    }

    /// Removes a player who has never played and has nothing recorded against
    /// them in any match.
    pub fn delete_player(&mut self, team_id: u32, player_id: u32) -> CupResult<Player> {
        let recorded_in = self
            .matches
            .iter()
            .find(|m| {
                m.goal_scorers.goals_of(player_id) > 0
                    || m.man_of_the_match.is_some_and(|motm| motm.player == player_id)
            })
            .map(|m| m.id);

        let removed = self.modify_team(team_id, |team| {
            if let Some(match_id) = recorded_in
                && !team.player(player_id)?.is_locked()
            {
                return Err(CupError::invalid(format!(
                    "player {} has goals or awards recorded in match {}",
                    player_id, match_id
                )));
            }

            team.delete_player(player_id)
        })?;

        info!("team {}: deleted player {}", team_id, removed.name);

        Ok(removed)
    }

    pub fn update_player_slot(
        &mut self,
        team_id: u32,
        player_id: u32,
        slot: PlayerPosition,
    ) -> CupResult<SlotAssignment> {
        self.modify_team(team_id, |team| team.assign_to_slot(player_id, slot))
    }

    /// Counts one more match for the player, which locks them against deletion.
    pub fn record_appearance(&mut self, team_id: u32, player_id: u32) -> CupResult<u32> {
        self.modify_team(team_id, |team| {
            let player = team.player_mut(player_id)?;
            player.record_appearance();
            Ok(player.matches_played)
        })
    }

    // Derived views

    pub fn bracket(&self, champion_id: u32) -> CupResult<Vec<BracketRound<'_>>> {
        let champion = self.champion(champion_id)?;

        Ok(BracketBuilder::build_rounds(champion, &self.matches))
    }

    pub fn top_scorers(&self, champion_id: u32) -> CupResult<Vec<ScorerStat>> {
        self.champion(champion_id)?;

        Ok(TopScorerAggregator::aggregate(
            self.matches.iter().filter(|m| m.champion_id == champion_id),
        ))
    }

    pub fn fixture_dates(&self, champion_id: Option<u32>) -> Vec<NaiveDate> {
        FixtureCalendar::dates(self.matches(champion_id))
    }

    pub fn fixtures_on(&self, champion_id: Option<u32>, date: NaiveDate) -> Vec<&Match> {
        FixtureCalendar::on_date(self.matches(champion_id), date)
    }
}
