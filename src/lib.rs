/// League stat tracker.
///
/// Ingests three related CSV datasets — games, teams, and per-game team
/// performance — and answers a fixed set of descriptive statistical
/// queries: scoring extremes, win/loss/tie distribution, season-level
/// aggregates, and offense rankings.
///
/// Layering:
/// - `model`   — typed records and the error taxonomy; no logic, no I/O.
/// - `ingest`  — the Tabular Data Source; CSV → typed tables, all
///   coercion done once at load time.
/// - `config`  — TOML file mapping logical table names to CSV locations.
/// - `stats`   — `StatTracker`, the query surface over the loaded tables.
/// - `logging` — leveled global logger, inert unless initialized.
///
/// ```no_run
/// use std::path::PathBuf;
/// use stattrack::ingest::csv_source::DatasetLocations;
/// use stattrack::stats::StatTracker;
///
/// # fn main() -> Result<(), stattrack::model::StatError> {
/// let tracker = StatTracker::from_csv(&DatasetLocations {
///     games: PathBuf::from("data/games.csv"),
///     teams: PathBuf::from("data/teams.csv"),
///     game_teams: PathBuf::from("data/game_teams.csv"),
/// })?;
/// println!("highest total score: {}", tracker.highest_total_score()?);
/// # Ok(())
/// # }
/// ```

pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod stats;

pub use config::DatasetConfig;
pub use ingest::csv_source::DatasetLocations;
pub use model::{GameRecord, GameTeamRecord, GameTotal, StatError, TeamRecord};
pub use stats::StatTracker;
