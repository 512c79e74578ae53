//! Team assignment model.

use serde::{Deserialize, Serialize};

use super::{AssignmentId, SeasonId, TeamId, UserId};

/// The relation linking a member to a team within a season.
///
/// A member with no assignment row for the current season is a free agent.
/// Referential integrity is the store's concern; an assignment whose user or
/// team cannot be resolved is silently dropped from derived views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    /// Unique identifier
    pub id: AssignmentId,

    /// Assigned member
    pub user_id: UserId,

    /// Assigned team
    pub team_id: TeamId,

    /// Season the assignment applies to
    pub season_id: SeasonId,
}
