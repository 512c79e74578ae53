//! Fixed sample data provider.
//!
//! Useful for local development with no database: every read returns the
//! same small season, and writes are logged no-ops. Selected at startup via
//! `data.use_sample_data` (or `serve --sample`) rather than baked in as a
//! compile-time global.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use crate::models::{
    FlagKey, Game, GameId, Season, SeasonId, Team, TeamAssignment, TeamColor, User,
};

use super::{ClubStore, StoreError};

/// The "use fixed sample data" mode.
pub struct SampleStore {
    season: Season,
    users: Vec<User>,
    teams: Vec<Team>,
    assignments: Vec<TeamAssignment>,
    games: Vec<Game>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Dates are fixed literals; NaiveDate construction cannot fail here.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

fn user(id: i64, name: &str, username: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
    }
}

fn team(id: i64, name: &str, flag: FlagKey, color: TeamColor) -> Team {
    Team {
        id,
        name: name.to_string(),
        flag,
        color,
    }
}

fn assignment(id: i64, user_id: i64, team_id: i64) -> TeamAssignment {
    TeamAssignment {
        id,
        user_id,
        team_id,
        season_id: 1,
    }
}

fn game(id: i64, d: NaiveDate, home: i64, away: i64) -> Game {
    Game {
        id,
        season_id: 1,
        date: d,
        home_team_id: home,
        away_team_id: away,
        home_score: None,
        away_score: None,
    }
}

impl SampleStore {
    pub fn new() -> Self {
        Self {
            season: Season {
                id: 1,
                name: "2025-spring-inaugural".to_string(),
                start_date: date(2025, 4, 3),
                end_date: date(2025, 6, 12),
            },
            users: vec![
                user(1, "Avery Collins", "avery"),
                user(2, "Dana Whitfield", "dana"),
                user(3, "Jordan Mears", "jmears"),
                user(4, "Priya Natarajan", "priya"),
                user(5, "Sam Okafor", "sam"),
            ],
            teams: vec![
                team(1, "Harbor Lane Rovers", FlagKey::Bolt, TeamColor::Blue),
                team(2, "Millbrook Wanderers", FlagKey::Triangle, TeamColor::Orange),
                team(3, "North Quay United", FlagKey::Alt, TeamColor::Silver),
                team(4, "Foundry Street FC", FlagKey::Fire, TeamColor::Green),
            ],
            assignments: vec![
                assignment(1, 1, 1),
                assignment(2, 2, 1),
                assignment(3, 3, 2),
                assignment(4, 4, 2),
                assignment(5, 5, 3),
            ],
            games: vec![
                game(1, date(2025, 4, 3), 1, 2),
                game(2, date(2025, 4, 3), 3, 4),
                game(3, date(2025, 4, 10), 1, 3),
                game(4, date(2025, 4, 10), 2, 4),
                game(5, date(2025, 4, 17), 1, 4),
                game(6, date(2025, 4, 17), 2, 3),
            ],
        }
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClubStore for SampleStore {
    async fn current_season(&self) -> Result<Option<Season>, StoreError> {
        Ok(Some(self.season.clone()))
    }

    async fn season_users(&self, _season_id: SeasonId) -> Result<Vec<User>, StoreError> {
        Ok(self.users.clone())
    }

    async fn season_teams(&self, _season_id: SeasonId) -> Result<Vec<Team>, StoreError> {
        Ok(self.teams.clone())
    }

    async fn season_assignments(
        &self,
        _season_id: SeasonId,
    ) -> Result<Vec<TeamAssignment>, StoreError> {
        Ok(self.assignments.clone())
    }

    async fn season_games(&self, _season_id: SeasonId) -> Result<Vec<Game>, StoreError> {
        Ok(self.games.clone())
    }

    async fn update_game_score(
        &self,
        game_id: GameId,
        _home_score: Option<i32>,
        _away_score: Option<i32>,
    ) -> Result<(), StoreError> {
        info!(game_id, "sample data mode: score update ignored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_has_a_current_season() {
        let store = SampleStore::new();
        let season = store.current_season().await.unwrap().unwrap();
        assert_eq!(season.id, 1);
        assert!(season.start_date < season.end_date);
    }

    #[tokio::test]
    async fn test_sample_referential_integrity() {
        let store = SampleStore::new();
        let season = store.current_season().await.unwrap().unwrap();
        let users = store.season_users(season.id).await.unwrap();
        let teams = store.season_teams(season.id).await.unwrap();
        let assignments = store.season_assignments(season.id).await.unwrap();
        let games = store.season_games(season.id).await.unwrap();

        for a in &assignments {
            assert!(users.iter().any(|u| u.id == a.user_id));
            assert!(teams.iter().any(|t| t.id == a.team_id));
            assert_eq!(a.season_id, season.id);
        }
        for g in &games {
            assert!(teams.iter().any(|t| t.id == g.home_team_id));
            assert!(teams.iter().any(|t| t.id == g.away_team_id));
            assert_ne!(g.home_team_id, g.away_team_id);
        }
    }

    #[tokio::test]
    async fn test_sample_games_start_unscored() {
        let store = SampleStore::new();
        let games = store.season_games(1).await.unwrap();
        assert_eq!(games.len(), 6);
        assert!(games.iter().all(|g| !g.is_complete()));
    }

    #[tokio::test]
    async fn test_sample_writes_are_noops() {
        let store = SampleStore::new();
        store.update_game_score(1, Some(9), Some(9)).await.unwrap();

        let games = store.season_games(1).await.unwrap();
        assert_eq!(games[0].home_score, None);
        assert_eq!(games[0].away_score, None);
    }
}
