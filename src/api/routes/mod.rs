//! Route handlers for the club API.

pub mod meta;
pub mod roster;
pub mod schedule;
pub mod scores;
pub mod standings;
