/// Core data types for the league stat tracker.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O — only the typed records the ingest layer
/// produces and the error taxonomy every query surfaces.

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Game table
// ---------------------------------------------------------------------------

/// One row of the games table: a single game between a home and an away team.
///
/// Goal counts are coerced from text once at load time; a blank or
/// unparseable goals field loads as 0. Records are immutable for the
/// lifetime of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub game_id: String,
    /// Season code, e.g. "20122013".
    pub season: String,
    /// "Postseason" or "Regular Season".
    pub game_type: String,
    /// Game date, if the source field parsed. No current statistic
    /// consumes this, but it is kept typed rather than stringly.
    pub date_time: Option<NaiveDate>,
    pub away_team_id: String,
    pub home_team_id: String,
    pub away_goals: u32,
    pub home_goals: u32,
    pub venue: String,
    pub venue_link: String,
}

/// Derived per-game value: combined score of both sides.
///
/// Computed on demand by `StatTracker::total_goals_per_game`; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTotal {
    pub game_id: String,
    pub total_goals: u32,
}

// ---------------------------------------------------------------------------
// Team table
// ---------------------------------------------------------------------------

/// One row of the teams table. `team_id` is unique within the table and is
/// the join key for per-team statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub team_id: String,
    pub franchise_id: String,
    pub team_name: String,
    pub abbreviation: String,
    pub stadium: String,
    pub link: String,
}

// ---------------------------------------------------------------------------
// Game-team table
// ---------------------------------------------------------------------------

/// Which side a team played in a given game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAway {
    Home,
    Away,
}

impl HomeAway {
    /// Parses the `home_or_away` field, case-insensitively.
    /// Unknown values are rejected — silently defaulting a category
    /// would corrupt outcome statistics downstream.
    pub fn parse(s: &str) -> Option<HomeAway> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Some(HomeAway::Home),
            "away" => Some(HomeAway::Away),
            _ => None,
        }
    }
}

/// Outcome of a game from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Tie,
}

impl GameResult {
    /// Parses the `result` field ("WIN" | "LOSS" | "TIE"), case-insensitively.
    pub fn parse(s: &str) -> Option<GameResult> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WIN" => Some(GameResult::Win),
            "LOSS" => Some(GameResult::Loss),
            "TIE" => Some(GameResult::Tie),
            _ => None,
        }
    }
}

/// One row of the game_teams table: one team's performance in one game.
///
/// `game_id` and `team_id` are foreign keys into the games and teams tables,
/// but referential integrity is not enforced at load time — statistics that
/// need the join skip unmatched ids instead.
#[derive(Debug, Clone, PartialEq)]
pub struct GameTeamRecord {
    pub game_id: String,
    pub team_id: String,
    pub side: HomeAway,
    pub result: GameResult,
    /// How the game was decided, e.g. "REG", "OT", "SO".
    pub settled_in: String,
    pub head_coach: String,
    pub goals: u32,
    pub shots: u32,
    pub tackles: u32,
    pub pim: u32,
    pub power_play_opportunities: u32,
    pub power_play_goals: u32,
    pub face_off_win_percentage: f64,
    pub giveaways: u32,
    pub takeaways: u32,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when loading datasets or computing statistics.
#[derive(Debug, PartialEq)]
pub enum StatError {
    /// A source table was missing, unreadable, or structurally malformed
    /// (bad CSV, missing consumed column, unrecognized category value).
    /// Raised by the ingest layer and propagated unmodified.
    Load { table: String, message: String },
    /// A statistic requiring at least one row (max/min score, best/worst
    /// offense) was requested over zero eligible rows.
    EmptyDataset(String),
    /// A percentage or average was requested with a zero denominator.
    DivideByZero(String),
}

impl std::fmt::Display for StatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatError::Load { table, message } => {
                write!(f, "Failed to load table '{}': {}", table, message)
            }
            StatError::EmptyDataset(what) => {
                write!(f, "No rows available for: {}", what)
            }
            StatError::DivideByZero(what) => {
                write!(f, "Zero denominator computing: {}", what)
            }
        }
    }
}

impl std::error::Error for StatError {}
