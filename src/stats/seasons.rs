/// Season-level aggregation.
///
/// Seasons are grouped in a single linear scan that accumulates a
/// (sum, count) pair per season key, keyed by first appearance in the
/// games table. Deriving counts and averages from the same pass keeps
/// the two season queries consistent with each other by construction.

use crate::model::StatError;
use crate::stats::{round2, StatTracker};

/// Running (total goals, game count) accumulator for one season.
struct SeasonAcc {
    season: String,
    total_goals: u64,
    games: usize,
}

impl StatTracker {
    /// One ordered accumulation pass over the games table.
    fn accumulate_by_season(&self) -> Vec<SeasonAcc> {
        let mut accs: Vec<SeasonAcc> = Vec::new();
        for game in self.games() {
            let total = (game.away_goals + game.home_goals) as u64;
            match accs.iter_mut().find(|acc| acc.season == game.season) {
                Some(acc) => {
                    acc.total_goals += total;
                    acc.games += 1;
                }
                None => accs.push(SeasonAcc {
                    season: game.season.clone(),
                    total_goals: total,
                    games: 1,
                }),
            }
        }
        accs
    }

    /// Number of games per season, keyed by first appearance in the table.
    pub fn count_of_games_by_season(&self) -> Vec<(String, usize)> {
        self.accumulate_by_season()
            .into_iter()
            .map(|acc| (acc.season, acc.games))
            .collect()
    }

    /// Mean combined score across all games, rounded to two decimals.
    pub fn average_goals_per_game(&self) -> Result<f64, StatError> {
        let total = self.total_games();
        if total == 0 {
            return Err(StatError::DivideByZero("average_goals_per_game".to_string()));
        }
        let goals: u64 = self
            .games()
            .iter()
            .map(|game| (game.away_goals + game.home_goals) as u64)
            .sum();
        Ok(round2(goals as f64 / total as f64))
    }

    /// Mean combined score per season, each rounded to two decimals.
    /// A season present in the table always has at least one game, so the
    /// per-season division cannot hit a zero denominator.
    pub fn average_goals_by_season(&self) -> Vec<(String, f64)> {
        self.accumulate_by_season()
            .into_iter()
            .map(|acc| {
                let avg = round2(acc.total_goals as f64 / acc.games as f64);
                (acc.season, avg)
            })
            .collect()
    }
}
