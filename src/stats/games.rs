/// Game-level scoring statistics and outcome distribution.
///
/// Every query here reads only the games table. Percentages are rounded
/// to two decimal places; asking for a percentage over zero games is a
/// `DivideByZero` error rather than NaN.

use crate::model::{GameTotal, StatError};
use crate::stats::{round2, StatTracker};

impl StatTracker {
    // -----------------------------------------------------------------------
    // Scoring
    // -----------------------------------------------------------------------

    /// Combined score of each game, in table order.
    pub fn total_goals_per_game(&self) -> Vec<GameTotal> {
        self.games()
            .iter()
            .map(|game| GameTotal {
                game_id: game.game_id.clone(),
                total_goals: game.away_goals + game.home_goals,
            })
            .collect()
    }

    /// The highest combined score across all games.
    pub fn highest_total_score(&self) -> Result<u32, StatError> {
        self.games()
            .iter()
            .map(|game| game.away_goals + game.home_goals)
            .max()
            .ok_or_else(|| StatError::EmptyDataset("highest_total_score".to_string()))
    }

    /// The lowest combined score across all games.
    pub fn lowest_total_score(&self) -> Result<u32, StatError> {
        self.games()
            .iter()
            .map(|game| game.away_goals + game.home_goals)
            .min()
            .ok_or_else(|| StatError::EmptyDataset("lowest_total_score".to_string()))
    }

    // -----------------------------------------------------------------------
    // Outcome distribution
    // -----------------------------------------------------------------------

    /// Row count of the games table.
    pub fn total_games(&self) -> usize {
        self.games().len()
    }

    /// Games where the home side outscored the visitors.
    pub fn number_of_home_wins(&self) -> usize {
        self.games()
            .iter()
            .filter(|game| game.home_goals > game.away_goals)
            .count()
    }

    /// Games where the visitors outscored the home side.
    pub fn number_of_visitor_wins(&self) -> usize {
        self.games()
            .iter()
            .filter(|game| game.away_goals > game.home_goals)
            .count()
    }

    /// Games that ended level.
    pub fn number_of_ties(&self) -> usize {
        self.games()
            .iter()
            .filter(|game| game.away_goals == game.home_goals)
            .count()
    }

    pub fn percentage_home_wins(&self) -> Result<f64, StatError> {
        self.outcome_share(self.number_of_home_wins(), "percentage_home_wins")
    }

    pub fn percentage_visitor_wins(&self) -> Result<f64, StatError> {
        self.outcome_share(self.number_of_visitor_wins(), "percentage_visitor_wins")
    }

    pub fn percentage_ties(&self) -> Result<f64, StatError> {
        self.outcome_share(self.number_of_ties(), "percentage_ties")
    }

    /// count / total_games, rounded to two decimals. Only defined when at
    /// least one game exists.
    fn outcome_share(&self, count: usize, what: &str) -> Result<f64, StatError> {
        let total = self.total_games();
        if total == 0 {
            return Err(StatError::DivideByZero(what.to_string()));
        }
        Ok(round2(count as f64 / total as f64))
    }
}
