/// League-wide statistics over the game_teams ⋈ teams join.
///
/// Offense rankings compare each team's mean goals per game_teams row
/// (mean rather than sum, so teams with different game counts compare
/// fairly). Accumulation is a single ordered scan; ties on the extreme
/// average are broken in favor of the team_id that appeared first in
/// the game_teams table, because the comparison only replaces the
/// incumbent on strict improvement.

use crate::model::StatError;
use crate::stats::StatTracker;

/// Running (goals, row count) accumulator for one team.
struct TeamAcc {
    team_id: String,
    goals: u64,
    rows: usize,
}

impl TeamAcc {
    fn average(&self) -> f64 {
        self.goals as f64 / self.rows as f64
    }
}

impl StatTracker {
    /// Row count of the teams table.
    pub fn count_of_teams(&self) -> usize {
        self.teams().len()
    }

    /// Name of the team with the highest mean goals per game.
    pub fn best_offense(&self) -> Result<String, StatError> {
        self.offense_extreme("best_offense", |candidate, incumbent| candidate > incumbent)
    }

    /// Name of the team with the lowest mean goals per game.
    pub fn worst_offense(&self) -> Result<String, StatError> {
        self.offense_extreme("worst_offense", |candidate, incumbent| candidate < incumbent)
    }

    /// One ordered accumulation pass over the game_teams table, keyed by
    /// first appearance of each team_id.
    fn accumulate_by_team(&self) -> Vec<TeamAcc> {
        let mut accs: Vec<TeamAcc> = Vec::new();
        for row in self.game_teams() {
            match accs.iter_mut().find(|acc| acc.team_id == row.team_id) {
                Some(acc) => {
                    acc.goals += row.goals as u64;
                    acc.rows += 1;
                }
                None => accs.push(TeamAcc {
                    team_id: row.team_id.clone(),
                    goals: row.goals as u64,
                    rows: 1,
                }),
            }
        }
        accs
    }

    /// Selects the team whose mean goals wins under `improves`, then
    /// resolves it to a display name through the teams table.
    ///
    /// A team with no game_teams rows has no defined average and is never
    /// a candidate; a team_id that does not resolve against the teams
    /// table is skipped, since the statistic's answer is a team name.
    /// If nothing is eligible the query fails with `EmptyDataset`.
    fn offense_extreme(
        &self,
        what: &str,
        improves: fn(f64, f64) -> bool,
    ) -> Result<String, StatError> {
        let mut extreme: Option<(&str, f64)> = None;
        for acc in &self.accumulate_by_team() {
            let Some(name) = self.team_name(&acc.team_id) else {
                continue;
            };
            let avg = acc.average();
            match extreme {
                Some((_, incumbent)) if !improves(avg, incumbent) => {}
                _ => extreme = Some((name, avg)),
            }
        }
        let (name, _) = extreme.ok_or_else(|| StatError::EmptyDataset(what.to_string()))?;
        Ok(name.to_string())
    }

    fn team_name(&self, team_id: &str) -> Option<&str> {
        self.teams()
            .iter()
            .find(|team| team.team_id == team_id)
            .map(|team| team.team_name.as_str())
    }
}
