/// Dataset configuration loading.
///
/// A TOML file maps each logical table name to its CSV location:
///
/// ```toml
/// [datasets]
/// games      = "data/games.csv"
/// teams      = "data/teams.csv"
/// game_teams = "data/game_teams.csv"
/// ```
///
/// A missing or syntactically invalid config file is reported as a load
/// failure on the pseudo-table "config".

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ingest::csv_source::DatasetLocations;
use crate::model::StatError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetConfig {
    pub datasets: DatasetPaths,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetPaths {
    pub games: PathBuf,
    pub teams: PathBuf,
    pub game_teams: PathBuf,
}

impl DatasetConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<DatasetConfig, StatError> {
        let text = std::fs::read_to_string(path).map_err(|e| StatError::Load {
            table: "config".to_string(),
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        toml::from_str(&text).map_err(|e| StatError::Load {
            table: "config".to_string(),
            message: format!("invalid config {}: {}", path.display(), e),
        })
    }

    /// The configured CSV locations, keyed by logical table.
    pub fn locations(&self) -> DatasetLocations {
        DatasetLocations {
            games: self.datasets.games.clone(),
            teams: self.datasets.teams.clone(),
            game_teams: self.datasets.game_teams.clone(),
        }
    }
}
