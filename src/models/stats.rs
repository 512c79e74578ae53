//! Derived statistics models.
//!
//! Everything here is recomputed per request from the full game list and is
//! never persisted.

use serde::{Deserialize, Serialize};

use super::{Team, TeamId};

/// Per-team season record, zero-initialized and folded over games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Team the record belongs to
    pub team_id: TeamId,

    /// Team name, carried for display
    pub team_name: String,

    /// Goals scored
    pub goals_for: i64,

    /// Goals conceded
    pub goals_against: i64,

    /// Completed games won
    pub wins: u32,

    /// Completed games lost
    pub losses: u32,

    /// Completed games tied
    pub ties: u32,
}

impl TeamStats {
    /// A zeroed record for the given team.
    pub fn zeroed(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            goals_for: 0,
            goals_against: 0,
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }
}

/// The numeric columns of [`TeamStats`] a summary can rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    Wins,
    Losses,
    Ties,
    GoalsFor,
    GoalsAgainst,
}

impl StatField {
    /// Every field, in the order the standings view presents them.
    pub const ALL: [StatField; 5] = [
        StatField::Wins,
        StatField::Losses,
        StatField::Ties,
        StatField::GoalsFor,
        StatField::GoalsAgainst,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            StatField::Wins => "Wins",
            StatField::Losses => "Losses",
            StatField::Ties => "Ties",
            StatField::GoalsFor => "Goals For",
            StatField::GoalsAgainst => "Goals Against",
        }
    }

    /// Extract this field's value from a record.
    pub fn value(&self, stats: &TeamStats) -> i64 {
        match self {
            StatField::Wins => i64::from(stats.wins),
            StatField::Losses => i64::from(stats.losses),
            StatField::Ties => i64::from(stats.ties),
            StatField::GoalsFor => stats.goals_for,
            StatField::GoalsAgainst => stats.goals_against,
        }
    }
}

/// One row of a ranked summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    /// Team name
    pub name: String,

    /// Value of the chosen field
    pub value: i64,
}

/// A chosen statistic's total across teams plus a descending ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSummary {
    /// Field the summary ranks by
    pub field: StatField,

    /// Sum across all teams
    pub total: i64,

    /// All teams, sorted descending by the field's value
    pub ranked: Vec<StatEntry>,
}
