//! Season standings: fold games into per-team records, then rank.

use std::collections::HashMap;

use crate::models::{Game, StatEntry, StatField, StatSummary, Team, TeamId, TeamStats};

/// Compute per-team records for a season.
///
/// Returns exactly one record per input team, in input order, each starting
/// from zero. Goals accrue per side independently: a recorded score adds to
/// the scorer's goals-for and the opponent's goals-against even when the
/// other score is still null. Win/loss/tie counts move only for complete
/// games (both scores recorded). A partially scored game can therefore add
/// goals without adding a result; that asymmetry is part of the contract.
///
/// Games referencing a team id outside `teams` contribute nothing for that
/// side.
pub fn team_stats(games: &[Game], teams: &[Team]) -> Vec<TeamStats> {
    let mut stats: Vec<TeamStats> = teams.iter().map(TeamStats::zeroed).collect();
    let index: HashMap<TeamId, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| (team.id, i))
        .collect();

    for game in games {
        if let Some(&i) = index.get(&game.home_team_id) {
            let home = &mut stats[i];
            if let Some(scored) = game.home_score {
                home.goals_for += i64::from(scored);
            }
            if let Some(conceded) = game.away_score {
                home.goals_against += i64::from(conceded);
            }
            if let (Some(home_score), Some(away_score)) = (game.home_score, game.away_score) {
                match home_score.cmp(&away_score) {
                    std::cmp::Ordering::Greater => home.wins += 1,
                    std::cmp::Ordering::Less => home.losses += 1,
                    std::cmp::Ordering::Equal => home.ties += 1,
                }
            }
        }

        if let Some(&i) = index.get(&game.away_team_id) {
            let away = &mut stats[i];
            if let Some(scored) = game.away_score {
                away.goals_for += i64::from(scored);
            }
            if let Some(conceded) = game.home_score {
                away.goals_against += i64::from(conceded);
            }
            if let (Some(home_score), Some(away_score)) = (game.home_score, game.away_score) {
                match away_score.cmp(&home_score) {
                    std::cmp::Ordering::Greater => away.wins += 1,
                    std::cmp::Ordering::Less => away.losses += 1,
                    std::cmp::Ordering::Equal => away.ties += 1,
                }
            }
        }
    }

    stats
}

/// Total a chosen field across teams and rank every team by it, descending.
///
/// Ties keep the input order of `stats`, which is the team initialization
/// order from [`team_stats`].
pub fn summarize(stats: &[TeamStats], field: StatField) -> StatSummary {
    let total = stats.iter().map(|s| field.value(s)).sum();

    let mut ranked: Vec<StatEntry> = stats
        .iter()
        .map(|s| StatEntry {
            name: s.team_name.clone(),
            value: field.value(s),
        })
        .collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));

    StatSummary {
        field,
        total,
        ranked,
    }
}
