//! Data-source boundary.
//!
//! Every page fetches its collections fresh through [`ClubStore`] and
//! recomputes derived views from scratch; the only write path is the
//! single-row score update. Two providers exist:
//! - [`PgStore`]: the live PostgreSQL store
//! - [`SampleStore`]: fixed in-memory data for local development, selected
//!   by configuration; writes are no-ops
//!
//! [`MemoryStore`] is a read-write in-memory implementation used by tests.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{Game, GameId, Season, SeasonId, Team, TeamAssignment, User};

pub mod postgres;
pub mod sample;

pub use postgres::PgStore;
pub use sample::SampleStore;

/// Errors surfaced by store operations.
///
/// Not locally recovered anywhere: a failed store call is fatal for the
/// request that issued it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// The club data-access operations, season-scoped where applicable.
#[async_trait]
pub trait ClubStore: Send + Sync {
    /// The current season: latest end date wins, whether or not it has
    /// already passed. `None` when no seasons exist.
    async fn current_season(&self) -> Result<Option<Season>, StoreError>;

    /// Members appearing in the season's assignment rows, ordered by id.
    async fn season_users(&self, season_id: SeasonId) -> Result<Vec<User>, StoreError>;

    /// Teams appearing in the season's assignment rows, ordered by id.
    async fn season_teams(&self, season_id: SeasonId) -> Result<Vec<Team>, StoreError>;

    /// The season's assignment rows, ordered by team id.
    async fn season_assignments(
        &self,
        season_id: SeasonId,
    ) -> Result<Vec<TeamAssignment>, StoreError>;

    /// The season's games, ordered by id.
    async fn season_games(&self, season_id: SeasonId) -> Result<Vec<Game>, StoreError>;

    /// Unconditionally set (or clear, with two `None`s) one game's scores.
    async fn update_game_score(
        &self,
        game_id: GameId,
        home_score: Option<i32>,
        away_score: Option<i32>,
    ) -> Result<(), StoreError>;
}

/// In-memory read-write store.
///
/// Backs router and round-trip tests with the same ordering guarantees as
/// [`PgStore`], without a database.
pub struct MemoryStore {
    inner: RwLock<MemoryData>,
}

struct MemoryData {
    seasons: Vec<Season>,
    users: Vec<User>,
    teams: Vec<Team>,
    assignments: Vec<TeamAssignment>,
    games: Vec<Game>,
}

impl MemoryStore {
    pub fn new(
        seasons: Vec<Season>,
        users: Vec<User>,
        teams: Vec<Team>,
        assignments: Vec<TeamAssignment>,
        games: Vec<Game>,
    ) -> Self {
        Self {
            inner: RwLock::new(MemoryData {
                seasons,
                users,
                teams,
                assignments,
                games,
            }),
        }
    }

    /// A store with no data at all, not even a season.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }
}

#[async_trait]
impl ClubStore for MemoryStore {
    async fn current_season(&self) -> Result<Option<Season>, StoreError> {
        let data = self.inner.read().await;
        Ok(Season::latest(&data.seasons))
    }

    async fn season_users(&self, season_id: SeasonId) -> Result<Vec<User>, StoreError> {
        let data = self.inner.read().await;
        let mut users: Vec<User> = data
            .users
            .iter()
            .filter(|u| {
                data.assignments
                    .iter()
                    .any(|a| a.season_id == season_id && a.user_id == u.id)
            })
            .cloned()
            .collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn season_teams(&self, season_id: SeasonId) -> Result<Vec<Team>, StoreError> {
        let data = self.inner.read().await;
        let mut teams: Vec<Team> = data
            .teams
            .iter()
            .filter(|t| {
                data.assignments
                    .iter()
                    .any(|a| a.season_id == season_id && a.team_id == t.id)
            })
            .cloned()
            .collect();
        teams.sort_by_key(|t| t.id);
        Ok(teams)
    }

    async fn season_assignments(
        &self,
        season_id: SeasonId,
    ) -> Result<Vec<TeamAssignment>, StoreError> {
        let data = self.inner.read().await;
        let mut assignments: Vec<TeamAssignment> = data
            .assignments
            .iter()
            .filter(|a| a.season_id == season_id)
            .copied()
            .collect();
        assignments.sort_by_key(|a| a.team_id);
        Ok(assignments)
    }

    async fn season_games(&self, season_id: SeasonId) -> Result<Vec<Game>, StoreError> {
        let data = self.inner.read().await;
        let mut games: Vec<Game> = data
            .games
            .iter()
            .filter(|g| g.season_id == season_id)
            .copied()
            .collect();
        games.sort_by_key(|g| g.id);
        Ok(games)
    }

    async fn update_game_score(
        &self,
        game_id: GameId,
        home_score: Option<i32>,
        away_score: Option<i32>,
    ) -> Result<(), StoreError> {
        let mut data = self.inner.write().await;
        if let Some(game) = data.games.iter_mut().find(|g| g.id == game_id) {
            game.home_score = home_score;
            game.away_score = away_score;
        }
        Ok(())
    }
}
