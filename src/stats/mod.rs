/// Statistical query surface over the three league tables.
///
/// `StatTracker` owns the loaded tables and answers every query by a
/// fresh linear scan — there is no cached derived state, so queries are
/// idempotent and may be called in any order. The tables are never
/// mutated after construction; shared read-only use across threads is
/// sound without locking.
///
/// Submodules group the queries by the table(s) they read:
/// - `games`   — scoring extremes and win/loss/tie distribution.
/// - `seasons` — grouping and averages keyed by season.
/// - `league`  — team counts and offense rankings (game_teams ⋈ teams).

pub mod games;
pub mod league;
pub mod seasons;

use std::path::Path;

use crate::config::DatasetConfig;
use crate::ingest::csv_source::{self, DatasetLocations};
use crate::model::{GameRecord, GameTeamRecord, StatError, TeamRecord};

// ---------------------------------------------------------------------------
// StatTracker
// ---------------------------------------------------------------------------

pub struct StatTracker {
    games: Vec<GameRecord>,
    teams: Vec<TeamRecord>,
    game_teams: Vec<GameTeamRecord>,
}

impl StatTracker {
    /// Constructs a tracker from three pre-loaded tables.
    pub fn new(
        games: Vec<GameRecord>,
        teams: Vec<TeamRecord>,
        game_teams: Vec<GameTeamRecord>,
    ) -> StatTracker {
        StatTracker {
            games,
            teams,
            game_teams,
        }
    }

    /// Loads all three tables from CSV files and constructs a tracker.
    ///
    /// Any unreadable or malformed source fails the whole construction;
    /// no tracker with partial tables is ever returned.
    pub fn from_csv(locations: &DatasetLocations) -> Result<StatTracker, StatError> {
        let games = csv_source::load_games_from_path(&locations.games)?;
        let teams = csv_source::load_teams_from_path(&locations.teams)?;
        let game_teams = csv_source::load_game_teams_from_path(&locations.game_teams)?;
        Ok(StatTracker::new(games, teams, game_teams))
    }

    /// Loads dataset locations from a TOML config file, then the tables.
    pub fn from_config(path: &Path) -> Result<StatTracker, StatError> {
        let config = DatasetConfig::from_file(path)?;
        StatTracker::from_csv(&config.locations())
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn game_teams(&self) -> &[GameTeamRecord] {
        &self.game_teams
    }
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

/// Rounds to two decimal places, half away from zero.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
