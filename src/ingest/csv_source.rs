/// CSV-backed Tabular Data Source.
///
/// Loads the three league datasets (games, teams, game_teams) from
/// headered CSV into the typed records defined in `model`. Each loader
/// reads from any `io::Read`, so tests can feed in-memory strings; the
/// `*_from_path` wrappers open files and tag failures with the logical
/// table name.
///
/// Coercion policy: integer fields parse leniently — blank or
/// unparseable text loads as 0. Categorical fields (`home_or_away`,
/// `result`) are strict: an unrecognized value fails the whole load.
/// Structural problems (missing file, missing consumed column, ragged
/// rows) also fail the whole load; no partial table is ever returned.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::logging::{self, Dataset};
use crate::model::{GameRecord, GameResult, GameTeamRecord, HomeAway, StatError, TeamRecord};

// ---------------------------------------------------------------------------
// Dataset locations
// ---------------------------------------------------------------------------

/// File locations for the three datasets, keyed by logical table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLocations {
    pub games: PathBuf,
    pub teams: PathBuf,
    pub game_teams: PathBuf,
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

// Numeric columns come in as text and are coerced below; identity and
// category columns are required, so a missing header fails deserialization.

#[derive(Debug, Deserialize)]
struct RawGame {
    game_id: String,
    season: String,
    #[serde(rename = "type")]
    game_type: String,
    #[serde(default)]
    date_time: String,
    away_team_id: String,
    home_team_id: String,
    away_goals: String,
    home_goals: String,
    #[serde(default)]
    venue: String,
    #[serde(default)]
    venue_link: String,
}

#[derive(Debug, Deserialize)]
struct RawTeam {
    team_id: String,
    #[serde(default)]
    franchise_id: String,
    #[serde(rename = "teamName")]
    team_name: String,
    #[serde(default)]
    abbreviation: String,
    #[serde(rename = "Stadium", default)]
    stadium: String,
    #[serde(default)]
    link: String,
}

#[derive(Debug, Deserialize)]
struct RawGameTeam {
    game_id: String,
    team_id: String,
    #[serde(rename = "HoA")]
    home_or_away: String,
    result: String,
    #[serde(default)]
    settled_in: String,
    #[serde(default)]
    head_coach: String,
    goals: String,
    #[serde(default)]
    shots: String,
    #[serde(default)]
    tackles: String,
    #[serde(default)]
    pim: String,
    #[serde(rename = "powerPlayOpportunities", default)]
    power_play_opportunities: String,
    #[serde(rename = "powerPlayGoals", default)]
    power_play_goals: String,
    #[serde(rename = "faceOffWinPercentage", default)]
    face_off_win_percentage: String,
    #[serde(default)]
    giveaways: String,
    #[serde(default)]
    takeaways: String,
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Lenient integer coercion: blank or non-numeric text loads as 0.
/// This is parsing policy, not error recovery — it never fails.
fn parse_or_zero(s: &str) -> u32 {
    s.trim().parse().unwrap_or(0)
}

/// Lenient float coercion for percentage-style columns.
fn parse_or_zero_f64(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}

/// Parses the leading date of a `date_time` field. The source writes
/// either a bare date or a date followed by a time; anything else
/// loads as `None`.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let t = s.trim();
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .ok()
        .or_else(|| t.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

fn load_error(table: &str, message: impl Into<String>) -> StatError {
    StatError::Load {
        table: table.to_string(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Reader-based loaders
// ---------------------------------------------------------------------------

/// Loads the games table, preserving row order.
pub fn load_games<R: Read>(rdr: R) -> Result<Vec<GameRecord>, StatError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut games = Vec::new();
    for result in reader.deserialize::<RawGame>() {
        let raw = result.map_err(|e| load_error("games", e.to_string()))?;
        games.push(GameRecord {
            game_id: raw.game_id,
            season: raw.season,
            game_type: raw.game_type,
            date_time: parse_date(&raw.date_time),
            away_team_id: raw.away_team_id,
            home_team_id: raw.home_team_id,
            away_goals: parse_or_zero(&raw.away_goals),
            home_goals: parse_or_zero(&raw.home_goals),
            venue: raw.venue,
            venue_link: raw.venue_link,
        });
    }
    Ok(games)
}

/// Loads the teams table, preserving row order.
pub fn load_teams<R: Read>(rdr: R) -> Result<Vec<TeamRecord>, StatError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut teams = Vec::new();
    for result in reader.deserialize::<RawTeam>() {
        let raw = result.map_err(|e| load_error("teams", e.to_string()))?;
        teams.push(TeamRecord {
            team_id: raw.team_id,
            franchise_id: raw.franchise_id,
            team_name: raw.team_name,
            abbreviation: raw.abbreviation,
            stadium: raw.stadium,
            link: raw.link,
        });
    }
    Ok(teams)
}

/// Loads the game_teams table, preserving row order.
pub fn load_game_teams<R: Read>(rdr: R) -> Result<Vec<GameTeamRecord>, StatError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<RawGameTeam>().enumerate() {
        let raw = result.map_err(|e| load_error("game_teams", e.to_string()))?;
        let side = HomeAway::parse(&raw.home_or_away).ok_or_else(|| {
            load_error(
                "game_teams",
                format!("row {}: unrecognized home_or_away value '{}'", i + 1, raw.home_or_away),
            )
        })?;
        let result = GameResult::parse(&raw.result).ok_or_else(|| {
            load_error(
                "game_teams",
                format!("row {}: unrecognized result value '{}'", i + 1, raw.result),
            )
        })?;
        rows.push(GameTeamRecord {
            game_id: raw.game_id,
            team_id: raw.team_id,
            side,
            result,
            settled_in: raw.settled_in,
            head_coach: raw.head_coach,
            goals: parse_or_zero(&raw.goals),
            shots: parse_or_zero(&raw.shots),
            tackles: parse_or_zero(&raw.tackles),
            pim: parse_or_zero(&raw.pim),
            power_play_opportunities: parse_or_zero(&raw.power_play_opportunities),
            power_play_goals: parse_or_zero(&raw.power_play_goals),
            face_off_win_percentage: parse_or_zero_f64(&raw.face_off_win_percentage),
            giveaways: parse_or_zero(&raw.giveaways),
            takeaways: parse_or_zero(&raw.takeaways),
        });
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Path-based loaders
// ---------------------------------------------------------------------------

fn open(table: &str, path: &Path) -> Result<File, StatError> {
    File::open(path)
        .map_err(|e| load_error(table, format!("cannot open {}: {}", path.display(), e)))
}

pub fn load_games_from_path(path: &Path) -> Result<Vec<GameRecord>, StatError> {
    let games = load_games(open("games", path)?).inspect_err(|e| {
        logging::error(Dataset::Games, &e.to_string());
    })?;
    logging::info(Dataset::Games, &format!("loaded {} games from {}", games.len(), path.display()));
    Ok(games)
}

pub fn load_teams_from_path(path: &Path) -> Result<Vec<TeamRecord>, StatError> {
    let teams = load_teams(open("teams", path)?).inspect_err(|e| {
        logging::error(Dataset::Teams, &e.to_string());
    })?;
    logging::info(Dataset::Teams, &format!("loaded {} teams from {}", teams.len(), path.display()));
    Ok(teams)
}

pub fn load_game_teams_from_path(path: &Path) -> Result<Vec<GameTeamRecord>, StatError> {
    let rows = load_game_teams(open("game_teams", path)?).inspect_err(|e| {
        logging::error(Dataset::GameTeams, &e.to_string());
    })?;
    logging::info(
        Dataset::GameTeams,
        &format!("loaded {} game_teams rows from {}", rows.len(), path.display()),
    );
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const GAMES_CSV: &str = "\
game_id,season,type,date_time,away_team_id,home_team_id,away_goals,home_goals,venue,venue_link
2012030221,20122013,Postseason,2013-05-16,3,6,2,3,Toyota Stadium,/api/v1/venues/null
2012030222,20122013,Postseason,2013-05-19,3,6,,5,Toyota Stadium,/api/v1/venues/null
";

    const GAME_TEAMS_CSV: &str = "\
game_id,team_id,HoA,result,settled_in,head_coach,goals,shots,tackles,pim,powerPlayOpportunities,powerPlayGoals,faceOffWinPercentage,giveaways,takeaways
2012030221,3,away,LOSS,OT,John Tortorella,2,35,44,8,3,0,44.8,17,7
2012030221,6,home,WIN,OT,Claude Julien,3,48,51,6,4,1,55.2,4,5
";

    #[test]
    fn test_load_games_preserves_order_and_coerces_goals() {
        let games = load_games(GAMES_CSV.as_bytes()).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].game_id, "2012030221");
        assert_eq!(games[0].away_goals, 2);
        assert_eq!(games[0].home_goals, 3);
        // Blank away_goals coerces to 0, never fails.
        assert_eq!(games[1].away_goals, 0);
        assert_eq!(games[1].home_goals, 5);
    }

    #[test]
    fn test_load_games_parses_dates() {
        let games = load_games(GAMES_CSV.as_bytes()).unwrap();
        assert_eq!(
            games[0].date_time,
            Some(NaiveDate::from_ymd_opt(2013, 5, 16).unwrap())
        );
    }

    #[test]
    fn test_load_games_missing_column_is_load_error() {
        let csv = "game_id,type\n1,Postseason\n";
        let err = load_games(csv.as_bytes()).unwrap_err();
        match err {
            StatError::Load { table, .. } => assert_eq!(table, "games"),
            other => panic!("expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_game_teams_typed_categories() {
        let rows = load_game_teams(GAME_TEAMS_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].side, HomeAway::Away);
        assert_eq!(rows[0].result, GameResult::Loss);
        assert_eq!(rows[1].side, HomeAway::Home);
        assert_eq!(rows[1].result, GameResult::Win);
        assert_eq!(rows[1].goals, 3);
        assert_eq!(rows[1].face_off_win_percentage, 55.2);
    }

    #[test]
    fn test_load_game_teams_rejects_unknown_category() {
        let csv = "\
game_id,team_id,HoA,result,goals
1,3,neutral,WIN,2
";
        let err = load_game_teams(csv.as_bytes()).unwrap_err();
        match err {
            StatError::Load { table, message } => {
                assert_eq!(table, "game_teams");
                assert!(message.contains("home_or_away"), "message: {}", message);
            }
            other => panic!("expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_teams() {
        let csv = "\
team_id,franchise_id,teamName,abbreviation,Stadium,link
1,23,Atlanta United,ATL,Mercedes-Benz Stadium,/api/v1/teams/1
4,16,Chicago Fire,CHI,SeatGeek Stadium,/api/v1/teams/4
";
        let teams = load_teams(csv.as_bytes()).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team_name, "Atlanta United");
        assert_eq!(teams[1].team_id, "4");
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_games_from_path(Path::new("/nonexistent/games.csv")).unwrap_err();
        match err {
            StatError::Load { table, message } => {
                assert_eq!(table, "games");
                assert!(message.contains("cannot open"));
            }
            other => panic!("expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_or_zero("7"), 7);
        assert_eq!(parse_or_zero(" 7 "), 7);
        assert_eq!(parse_or_zero(""), 0);
        assert_eq!(parse_or_zero("n/a"), 0);
        assert_eq!(parse_or_zero("-3"), 0); // goals are non-negative
    }
}
