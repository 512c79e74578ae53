//! Scheduled game model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{GameId, SeasonId, TeamId};

/// A scheduled game between two teams.
///
/// Scores stay null until entered from the scoresheet. A game with both
/// scores present is complete and counts toward standings; a game with
/// either score missing is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier
    pub id: GameId,

    /// Season the game belongs to
    pub season_id: SeasonId,

    /// Day the game is played
    pub date: NaiveDate,

    /// Home team
    pub home_team_id: TeamId,

    /// Away team
    pub away_team_id: TeamId,

    /// Home score, null until entered
    pub home_score: Option<i32>,

    /// Away score, null until entered
    pub away_score: Option<i32>,
}

impl Game {
    /// Whether both scores have been recorded.
    pub fn is_complete(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}
