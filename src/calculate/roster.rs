//! Roster grouping: members clustered by team assignment.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Team, TeamAssignment, TeamId, User};

/// A member paired with their resolved team, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub user: User,
    pub team: Team,
}

/// Group members by team assignment for the roster view.
///
/// Built only from assignment rows: members without an assignment never
/// appear, and an assignment whose user or team cannot be resolved is
/// dropped. Teams with no surviving members are omitted entirely.
///
/// Members within a team are sorted by name. Team blocks are ordered by the
/// name of each block's first (already sorted) member, not by team name —
/// team order is a side effect of member order, and the view depends on it
/// staying that way.
pub fn group_users_by_team(
    users: &[User],
    assignments: &[TeamAssignment],
    teams: &[Team],
) -> Vec<RosterEntry> {
    let mut by_team: HashMap<TeamId, Vec<User>> = HashMap::new();
    for assignment in assignments {
        let Some(user) = users.iter().find(|u| u.id == assignment.user_id) else {
            continue;
        };
        by_team
            .entry(assignment.team_id)
            .or_default()
            .push(user.clone());
    }

    let mut buckets: Vec<(TeamId, Vec<User>)> = by_team.into_iter().collect();
    for (_, members) in &mut buckets {
        members.sort_by(|a, b| a.name.cmp(&b.name));
    }
    buckets.sort_by(|(_, a), (_, b)| a[0].name.cmp(&b[0].name));

    let mut entries = Vec::new();
    for (team_id, members) in buckets {
        let Some(team) = teams.iter().find(|t| t.id == team_id) else {
            continue;
        };
        for user in members {
            entries.push(RosterEntry {
                user,
                team: team.clone(),
            });
        }
    }

    entries
}
