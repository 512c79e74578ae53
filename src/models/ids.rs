//! Numeric identifiers, assigned by the data store.
//!
//! Ids are plain integers rather than newtypes: every id in this domain is a
//! store-assigned row id, and the schedule view derives a venue label from
//! the parity of a game id, so the numeric value is part of the contract.

/// Type alias for user ids
pub type UserId = i64;

/// Type alias for team ids
pub type TeamId = i64;

/// Type alias for season ids
pub type SeasonId = i64;

/// Type alias for team-assignment ids
pub type AssignmentId = i64;

/// Type alias for game ids
pub type GameId = i64;
