//! # Pitchside
//!
//! A recreational sports club tracker: season rosters, team assignments,
//! an editable match schedule, and derived standings.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (seasons, members, teams, games)
//! - **calculate**: Pure per-request derivations (roster grouping,
//!   standings, schedule presentation)
//! - **store**: Data-source boundary (live PostgreSQL or fixed sample data)
//! - **api**: REST API endpoints with session-gated club routes
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod store;

pub use models::*;
