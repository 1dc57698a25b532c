//! End-to-end tests over the reference CSV fixtures in tests/data/.
//!
//! The fixture holds four games with (away, home) goal pairs
//! (2,3), (3,5), (3,3), (1,0) across four distinct seasons, three teams,
//! and both game_teams rows for every game. Expected values are worked
//! out by hand in the asserts below.

use std::path::{Path, PathBuf};

use stattrack::{DatasetLocations, StatError, StatTracker};

fn fixture_locations() -> DatasetLocations {
    DatasetLocations {
        games: PathBuf::from("tests/data/games.csv"),
        teams: PathBuf::from("tests/data/teams.csv"),
        game_teams: PathBuf::from("tests/data/game_teams.csv"),
    }
}

fn fixture_tracker() -> StatTracker {
    StatTracker::from_csv(&fixture_locations()).expect("fixture datasets should load")
}

#[test]
fn test_from_csv_loads_all_three_tables() {
    let tracker = fixture_tracker();
    assert_eq!(tracker.games().len(), 4);
    assert_eq!(tracker.teams().len(), 3);
    assert_eq!(tracker.game_teams().len(), 8);
}

#[test]
fn test_from_config_matches_from_csv() {
    let from_config = StatTracker::from_config(Path::new("tests/data/stattrack.toml"))
        .expect("config should load");
    let from_csv = fixture_tracker();
    assert_eq!(from_config.games(), from_csv.games());
    assert_eq!(from_config.teams(), from_csv.teams());
    assert_eq!(from_config.game_teams(), from_csv.game_teams());
}

#[test]
fn test_missing_source_fails_construction() {
    let mut locations = fixture_locations();
    locations.game_teams = PathBuf::from("tests/data/no_such_file.csv");
    match StatTracker::from_csv(&locations) {
        Err(StatError::Load { table, .. }) => assert_eq!(table, "game_teams"),
        other => panic!("expected Load error, got {:?}", other.map(|_| "tracker")),
    }
}

#[test]
fn test_game_scoring_statistics() {
    let tracker = fixture_tracker();

    let totals: Vec<u32> = tracker
        .total_goals_per_game()
        .into_iter()
        .map(|t| t.total_goals)
        .collect();
    assert_eq!(totals, vec![5, 8, 6, 1]);

    assert_eq!(tracker.highest_total_score().unwrap(), 8);
    assert_eq!(tracker.lowest_total_score().unwrap(), 1);
}

#[test]
fn test_outcome_distribution() {
    let tracker = fixture_tracker();

    assert_eq!(tracker.total_games(), 4);
    assert_eq!(tracker.number_of_home_wins(), 2);
    assert_eq!(tracker.number_of_visitor_wins(), 1);
    assert_eq!(tracker.number_of_ties(), 1);

    assert_eq!(tracker.percentage_home_wins().unwrap(), 0.50);
    assert_eq!(tracker.percentage_visitor_wins().unwrap(), 0.25);
    assert_eq!(tracker.percentage_ties().unwrap(), 0.25);
}

#[test]
fn test_outcome_counts_partition_all_games() {
    let tracker = fixture_tracker();
    assert_eq!(
        tracker.number_of_home_wins()
            + tracker.number_of_visitor_wins()
            + tracker.number_of_ties(),
        tracker.total_games()
    );

    let percentage_sum = tracker.percentage_home_wins().unwrap()
        + tracker.percentage_visitor_wins().unwrap()
        + tracker.percentage_ties().unwrap();
    assert!(
        (percentage_sum - 1.0).abs() <= 0.03,
        "rounded percentages should sum to ~1.00, got {}",
        percentage_sum
    );
}

#[test]
fn test_season_aggregation() {
    let tracker = fixture_tracker();

    let counts = tracker.count_of_games_by_season();
    assert_eq!(
        counts,
        vec![
            ("20122013".to_string(), 1),
            ("20132014".to_string(), 1),
            ("20142015".to_string(), 1),
            ("20152016".to_string(), 1),
        ]
    );
    let count_sum: usize = counts.iter().map(|(_, n)| n).sum();
    assert_eq!(count_sum, tracker.total_games());

    // (5 + 8 + 6 + 1) / 4 = 5.0
    assert_eq!(tracker.average_goals_per_game().unwrap(), 5.0);

    assert_eq!(
        tracker.average_goals_by_season(),
        vec![
            ("20122013".to_string(), 5.0),
            ("20132014".to_string(), 8.0),
            ("20142015".to_string(), 6.0),
            ("20152016".to_string(), 1.0),
        ]
    );
}

#[test]
fn test_league_statistics() {
    let tracker = fixture_tracker();

    assert_eq!(tracker.count_of_teams(), 3);

    // Mean goals per row: FC Dallas (3+5+3)/3 ≈ 3.67, Sporting KC (3+1)/2
    // = 2.0, Houston Dynamo (2+3+0)/3 ≈ 1.67.
    assert_eq!(tracker.best_offense().unwrap(), "FC Dallas");
    assert_eq!(tracker.worst_offense().unwrap(), "Houston Dynamo");
}

#[test]
fn test_queries_are_idempotent() {
    let tracker = fixture_tracker();
    assert_eq!(tracker.highest_total_score(), tracker.highest_total_score());
    assert_eq!(tracker.count_of_games_by_season(), tracker.count_of_games_by_season());
    assert_eq!(tracker.average_goals_by_season(), tracker.average_goals_by_season());
    assert_eq!(tracker.best_offense(), tracker.best_offense());
    assert_eq!(tracker.percentage_ties(), tracker.percentage_ties());
}

#[test]
fn test_header_only_games_table_fails_row_statistics() {
    let mut locations = fixture_locations();
    locations.games = PathBuf::from("tests/data/empty_games.csv");
    let tracker = StatTracker::from_csv(&locations).expect("empty table still loads");

    assert_eq!(tracker.total_games(), 0);
    assert!(tracker.total_goals_per_game().is_empty());
    assert_eq!(
        tracker.highest_total_score().unwrap_err(),
        StatError::EmptyDataset("highest_total_score".to_string())
    );
    assert_eq!(
        tracker.percentage_home_wins().unwrap_err(),
        StatError::DivideByZero("percentage_home_wins".to_string())
    );
    assert_eq!(
        tracker.average_goals_per_game().unwrap_err(),
        StatError::DivideByZero("average_goals_per_game".to_string())
    );
}

#[test]
fn test_empty_game_teams_fails_offense_rankings() {
    let tracker = StatTracker::new(
        Vec::new(),
        fixture_tracker().teams().to_vec(),
        Vec::new(),
    );
    assert_eq!(
        tracker.best_offense().unwrap_err(),
        StatError::EmptyDataset("best_offense".to_string())
    );
    assert_eq!(
        tracker.worst_offense().unwrap_err(),
        StatError::EmptyDataset("worst_offense".to_string())
    );
}
