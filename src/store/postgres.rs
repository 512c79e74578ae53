//! Live PostgreSQL store.
//!
//! Queries are bound at runtime (no compile-time database required) and
//! mirror the boundary contract: teams and users for a season are resolved
//! through its assignment rows, and the score update is a single
//! unconditional row write.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::models::{
    FlagKey, Game, GameId, Season, SeasonId, Team, TeamAssignment, TeamColor, User,
};

use super::{ClubStore, StoreError};

/// PostgreSQL-backed [`ClubStore`].
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect a pool against the configured database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        debug!(max_connections = config.max_connections, "connected to database");
        Ok(Self { pool })
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("database migrations applied");
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct SeasonRow {
    id: i64,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl From<SeasonRow> for Season {
    fn from(row: SeasonRow) -> Self {
        Season {
            id: row.id,
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    username: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            username: row.username,
            email: row.email,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: i64,
    name: String,
    flag_key: String,
    color: String,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team {
            id: row.id,
            name: row.name,
            flag: FlagKey::from_key(&row.flag_key),
            color: TeamColor::from_key(&row.color),
        }
    }
}

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    id: i64,
    user_id: i64,
    team_id: i64,
    season_id: i64,
}

impl From<AssignmentRow> for TeamAssignment {
    fn from(row: AssignmentRow) -> Self {
        TeamAssignment {
            id: row.id,
            user_id: row.user_id,
            team_id: row.team_id,
            season_id: row.season_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct GameRow {
    id: i64,
    season_id: i64,
    date: NaiveDate,
    home_team_id: i64,
    away_team_id: i64,
    home_score: Option<i32>,
    away_score: Option<i32>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            id: row.id,
            season_id: row.season_id,
            date: row.date,
            home_team_id: row.home_team_id,
            away_team_id: row.away_team_id,
            home_score: row.home_score,
            away_score: row.away_score,
        }
    }
}

#[async_trait]
impl ClubStore for PgStore {
    async fn current_season(&self) -> Result<Option<Season>, StoreError> {
        let row = sqlx::query_as::<_, SeasonRow>(
            "SELECT id, name, start_date, end_date FROM seasons ORDER BY end_date DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Season::from))
    }

    async fn season_users(&self, season_id: SeasonId) -> Result<Vec<User>, StoreError> {
        let assignments = self.season_assignments(season_id).await?;
        let user_ids: Vec<i64> = assignments.iter().map(|a| a.user_id).collect();

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, username, email FROM users WHERE id = ANY($1) ORDER BY id",
        )
        .bind(&user_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn season_teams(&self, season_id: SeasonId) -> Result<Vec<Team>, StoreError> {
        let assignments = self.season_assignments(season_id).await?;
        let team_ids: Vec<i64> = assignments.iter().map(|a| a.team_id).collect();

        let rows = sqlx::query_as::<_, TeamRow>(
            "SELECT id, name, flag_key, color FROM teams WHERE id = ANY($1) ORDER BY id",
        )
        .bind(&team_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn season_assignments(
        &self,
        season_id: SeasonId,
    ) -> Result<Vec<TeamAssignment>, StoreError> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            "SELECT id, user_id, team_id, season_id FROM team_assignments \
             WHERE season_id = $1 ORDER BY team_id",
        )
        .bind(season_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TeamAssignment::from).collect())
    }

    async fn season_games(&self, season_id: SeasonId) -> Result<Vec<Game>, StoreError> {
        let rows = sqlx::query_as::<_, GameRow>(
            "SELECT id, season_id, date, home_team_id, away_team_id, home_score, away_score \
             FROM games WHERE season_id = $1 ORDER BY id",
        )
        .bind(season_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn update_game_score(
        &self,
        game_id: GameId,
        home_score: Option<i32>,
        away_score: Option<i32>,
    ) -> Result<(), StoreError> {
        sqlx::query("UPDATE games SET home_score = $2, away_score = $3 WHERE id = $1")
            .bind(game_id)
            .bind(home_score)
            .bind(away_score)
            .execute(&self.pool)
            .await?;

        info!(game_id, ?home_score, ?away_score, "game score updated");
        Ok(())
    }
}
