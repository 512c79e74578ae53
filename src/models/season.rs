//! Season model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SeasonId;

/// A bounded date range grouping teams, members, and games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// Unique identifier
    pub id: SeasonId,

    /// Season name (e.g., "2025-spring")
    pub name: String,

    /// First day of play
    pub start_date: NaiveDate,

    /// Last day of play
    pub end_date: NaiveDate,
}

impl Season {
    /// Pick the "current" season: the one with the latest end date.
    ///
    /// Deliberately not filtered against today's date, so a club whose last
    /// season has already ended still resolves to that season.
    pub fn latest(seasons: &[Season]) -> Option<Season> {
        seasons.iter().max_by_key(|s| s.end_date).cloned()
    }
}
