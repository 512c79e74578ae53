use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{present, GameRow};

use super::roster::SeasonInfo;

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub season: SeasonInfo,
    pub games: Vec<GameRow>,
}

/// Current-season schedule, chronological, with display attributes.
pub async fn schedule(State(state): State<AppState>) -> Result<Json<ScheduleResponse>, ApiError> {
    let season = state
        .store
        .current_season()
        .await?
        .ok_or(ApiError::NoSeason)?;

    let games = state.store.season_games(season.id).await?;
    let teams = state.store.season_teams(season.id).await?;

    Ok(Json(ScheduleResponse {
        season: SeasonInfo::from(&season),
        games: present(&games, &teams),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::Role;
    use crate::api::build_router;
    use crate::config::AuthConfig;
    use crate::models::{FlagKey, Game, Season, Team, TeamAssignment, TeamColor, User};
    use crate::store::MemoryStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn seeded_state() -> AppState {
        let store = MemoryStore::new(
            vec![Season {
                id: 1,
                name: "2025-spring".to_string(),
                start_date: date(4, 3),
                end_date: date(6, 12),
            }],
            vec![User {
                id: 1,
                name: "Ada".to_string(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
            }],
            vec![
                Team {
                    id: 1,
                    name: "Alpha".to_string(),
                    flag: FlagKey::Bolt,
                    color: TeamColor::Blue,
                },
                Team {
                    id: 2,
                    name: "Beta".to_string(),
                    flag: FlagKey::Fire,
                    color: TeamColor::Green,
                },
            ],
            vec![
                TeamAssignment {
                    id: 1,
                    user_id: 1,
                    team_id: 1,
                    season_id: 1,
                },
                TeamAssignment {
                    id: 2,
                    user_id: 1,
                    team_id: 2,
                    season_id: 1,
                },
            ],
            vec![
                // Later date first: presentation must re-sort.
                Game {
                    id: 2,
                    season_id: 1,
                    date: date(4, 17),
                    home_team_id: 1,
                    away_team_id: 2,
                    home_score: Some(2),
                    away_score: Some(2),
                },
                Game {
                    id: 1,
                    season_id: 1,
                    date: date(4, 10),
                    home_team_id: 2,
                    away_team_id: 1,
                    home_score: Some(1),
                    away_score: None,
                },
            ],
        );
        AppState::new(Arc::new(store), AuthConfig::default())
    }

    async fn open_session(state: &AppState) -> String {
        let token = "test-session".to_string();
        state
            .sessions
            .write()
            .await
            .insert(token.clone(), Role::Member);
        token
    }

    async fn get_json(app: axum::Router, uri: &str, token: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_schedule_rows() {
        let state = seeded_state();
        let token = open_session(&state).await;
        let app = build_router(state);

        let (status, json) = get_json(app, "/api/club/schedule", &token).await;
        assert_eq!(status, StatusCode::OK);

        let games = json["games"].as_array().unwrap();
        assert_eq!(games.len(), 2);

        // Chronological order, not store order.
        assert_eq!(games[0]["id"], 1);
        assert_eq!(games[1]["id"], 2);

        // Pending game: TBD cell, neutral columns, odd id plays front.
        assert_eq!(games[0]["home_team"], "Beta");
        assert_eq!(games[0]["home_score_text"], "1");
        assert_eq!(games[0]["away_score_text"], "TBD");
        assert_eq!(games[0]["home_highlight"], "neutral");
        assert_eq!(games[0]["venue"], "front");

        // Complete tie: both columns tied, even id plays back.
        assert_eq!(games[1]["home_highlight"], "tie");
        assert_eq!(games[1]["away_highlight"], "tie");
        assert_eq!(games[1]["venue"], "back");
        assert_eq!(games[1]["date_text"], "4/17/2025");
    }

    #[tokio::test]
    async fn test_schedule_requires_session() {
        let app = build_router(seeded_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/club/schedule")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
