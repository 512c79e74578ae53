//! Derived-view computation.
//!
//! Pure, synchronous transformations over the per-request collections
//! fetched from the store:
//! - standings: per-team records and ranked stat summaries
//! - roster: members grouped by team assignment
//! - schedule: chronological game rows with display attributes
//!
//! Nothing here touches the store or holds state between requests.

pub mod roster;
pub mod schedule;
pub mod standings;

pub use roster::{group_users_by_team, RosterEntry};
pub use schedule::{present, GameRow, Highlight, Venue};
pub use standings::{summarize, team_stats};
