mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

use cup_core::CupError;
use serde::Deserialize;

/// Raw tournament snapshot as stored on disk.
#[derive(Debug, Default, Deserialize)]
pub struct DatabaseEntity {
    #[serde(default)]
    pub champions: Vec<ChampionEntity>,
    #[serde(default)]
    pub teams: Vec<TeamEntity>,
    #[serde(default)]
    pub matches: Vec<MatchEntity>,
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("embedded snapshot {0} is missing")]
    MissingEmbedded(&'static str),

    #[error("snapshot rejected: {0}")]
    Invalid(#[from] CupError),
}
