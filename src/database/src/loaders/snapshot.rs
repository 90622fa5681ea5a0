use crate::{DatabaseEntity, DatabaseError};
use flate2::read::GzDecoder;
use include_dir::{include_dir, Dir};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

static DATA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/data");

const SAMPLE_SNAPSHOT: &str = "sample.json";

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Loads the snapshot bundled with the binary.
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        let file = DATA_DIR
            .get_file(SAMPLE_SNAPSHOT)
            .ok_or(DatabaseError::MissingEmbedded(SAMPLE_SNAPSHOT))?;

        let database: DatabaseEntity = serde_json::from_slice(file.contents())?;

        debug!("embedded snapshot {} loaded", SAMPLE_SNAPSHOT);

        Ok(database)
    }

    /// Loads a `.json` snapshot, or a gzip-compressed one when the name ends in `.gz`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<DatabaseEntity, DatabaseError> {
        let path = path.as_ref();

        let io_error = |source| DatabaseError::Io {
            path: path.display().to_string(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;

        let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(GzDecoder::new(BufReader::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        let database = Self::parse(reader)?;

        info!(
            "snapshot {} loaded: {} champion(s), {} team(s), {} match(es)",
            path.display(),
            database.champions.len(),
            database.teams.len(),
            database.matches.len()
        );

        Ok(database)
    }

    pub fn parse(reader: impl Read) -> Result<DatabaseEntity, DatabaseError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn embedded_sample_is_readable() {
        let database = DatabaseLoader::load().unwrap();

        assert!(!database.champions.is_empty());
        assert!(!database.teams.is_empty());
        assert!(!database.matches.is_empty());
    }

    #[test]
    fn parse_accepts_minimal_snapshot() {
        let json = r#"{
            "champions": [{
                "id": 1, "name": "Spring Cup", "season": "2025",
                "startDate": "2025-03-01", "endDate": "2025-04-01",
                "startingRound": "Quarterfinal", "logo": null
            }]
        }"#;

        let database = DatabaseLoader::parse(json.as_bytes()).unwrap();

        assert_eq!(database.champions.len(), 1);
        assert!(database.teams.is_empty());
        assert!(database.matches.is_empty());
    }

    #[test]
    fn load_from_reads_gzip_snapshot() {
        let path = std::env::temp_dir().join(format!("cup-snapshot-{}.json.gz", std::process::id()));

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"{"champions": [], "teams": [], "matches": []}"#).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let database = DatabaseLoader::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(database.champions.is_empty());
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = DatabaseLoader::load_from("/nonexistent/cup.json");

        assert!(matches!(result, Err(DatabaseError::Io { .. })));
    }
}
