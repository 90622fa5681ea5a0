use cup_core::{Champion, Match, ScorerStat, Stage, TournamentStore};
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::{info, warn};
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChampionReport<'s> {
    champion: &'s Champion,
    rounds: Vec<RoundReport<'s>>,
    top_scorers: Vec<ScorerReport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundReport<'s> {
    stage: Stage,
    title: &'static str,
    free_slots: usize,
    matches: Vec<&'s Match>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScorerReport {
    #[serde(flatten)]
    stat: ScorerStat,
    player_name: String,
    team_name: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let snapshot = env::args().nth(1).or_else(|| env::var("CUP_SNAPSHOT").ok());
    let is_json_output = env::var("CUP_OUTPUT") == Ok(String::from("json"));

    let champion_filter = match env::var("CUP_CHAMPION") {
        Ok(value) => Some(value.parse::<u32>()?),
        Err(_) => None,
    };

    let started = Instant::now();

    let database = match &snapshot {
        Some(path) => DatabaseLoader::load_from(path)?,
        None => DatabaseLoader::load()?,
    };

    let store = DatabaseGenerator::generate(&database)?;

    info!("database loaded: {} ms", started.elapsed().as_millis());

    let reports = store
        .champions()
        .iter()
        .filter(|c| champion_filter.is_none_or(|id| c.id == id))
        .map(|c| build_report(&store, c))
        .collect::<Result<Vec<_>, _>>()?;

    if reports.is_empty() {
        warn!("no champion matches the requested filter");
    }

    if is_json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        reports.iter().for_each(|report| log_report(&store, report));
    }

    Ok(())
}

fn build_report<'s>(
    store: &'s TournamentStore,
    champion: &'s Champion,
) -> cup_core::CupResult<ChampionReport<'s>> {
    let rounds = store
        .bracket(champion.id)?
        .into_iter()
        .map(|round| RoundReport {
            stage: round.stage,
            title: round.title(),
            free_slots: round.free_slots(),
            matches: round.matches,
        })
        .collect();

    let top_scorers = store
        .top_scorers(champion.id)?
        .into_iter()
        .map(|stat| ScorerReport {
            player_name: store
                .find_player(stat.player_id)
                .map(|(_, p)| p.name.clone())
                .unwrap_or_else(|| format!("#{}", stat.player_id)),
            team_name: team_name(store, stat.team_id),
            stat,
        })
        .collect();

    Ok(ChampionReport {
        champion,
        rounds,
        top_scorers,
    })
}

fn team_name(store: &TournamentStore, team_id: Option<u32>) -> String {
    team_id
        .and_then(|id| store.team(id).ok())
        .map(|t| t.name.clone())
        .unwrap_or_else(|| String::from("TBD"))
}

fn log_report(store: &TournamentStore, report: &ChampionReport) {
    let champion = report.champion;

    info!("{} ({} - {})", champion, champion.start_date, champion.end_date);

    for round in &report.rounds {
        info!("  {} ({} free)", round.title, round.free_slots);

        for m in &round.matches {
            info!(
                "    #{} {} {} - {} {} [{}]",
                m.position,
                team_name(store, m.team1),
                m.score1,
                m.score2,
                team_name(store, m.team2),
                m.status
            );
        }

        if round.stage.is_final()
            && let Some(winner) = round.matches.first().and_then(|m| m.winner_team_id())
        {
            info!("  champion: {}", team_name(store, Some(winner)));
        }
    }

    for date in store.fixture_dates(Some(champion.id)) {
        let fixtures = store.fixtures_on(Some(champion.id), date);
        info!("  {}: {} fixture(s)", date, fixtures.len());
    }

    for (rank, scorer) in report.top_scorers.iter().enumerate() {
        info!(
            "  {}. {} ({}) {} goal(s) in {} match(es)",
            rank + 1,
            scorer.player_name,
            scorer.team_name,
            scorer.stat.goals,
            scorer.stat.matches_played
        );
    }
}
