use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::api::state::{AppState, ScheduleRefresh};
use crate::api::ApiError;
use crate::models::GameId;

/// Scores to record; either side may be null.
#[derive(Debug, Deserialize)]
pub struct ScorePayload {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

/// Record a game's scores.
///
/// An unconditional single-row write: no concurrency check, no sign
/// validation. Success is communicated by status alone, and a refresh
/// signal is emitted either way the store is configured (sample mode
/// revalidates too, matching its no-op write).
pub async fn set_score(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
    Json(payload): Json<ScorePayload>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .update_game_score(game_id, payload.home, payload.away)
        .await?;

    let receivers = state
        .schedule_events
        .send(ScheduleRefresh::ScoreSet { game_id });
    debug!(game_id, receivers = receivers.unwrap_or(0), "score set");

    Ok(StatusCode::NO_CONTENT)
}

/// Clear a game's scores back to unplayed.
pub async fn clear_score(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> Result<StatusCode, ApiError> {
    state.store.update_game_score(game_id, None, None).await?;

    let receivers = state
        .schedule_events
        .send(ScheduleRefresh::ScoreCleared { game_id });
    debug!(game_id, receivers = receivers.unwrap_or(0), "score cleared");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::Role;
    use crate::api::build_router;
    use crate::config::AuthConfig;
    use crate::models::{FlagKey, Game, Season, Team, TeamAssignment, TeamColor, User};
    use crate::store::{ClubStore, MemoryStore, SampleStore};
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn seeded_store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new(
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
            vec![TeamAssignment {
                id: 1,
                user_id: 1,
                team_id: 1,
                season_id: 1,
            }],
            vec![Game {
                id: 1,
                season_id: 1,
                date: date(4, 10),
                home_team_id: 1,
                away_team_id: 2,
                home_score: None,
                away_score: None,
            }],
        ))
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

    async fn send(
        app: axum::Router,
        method: &str,
        uri: &str,
        token: &str,
        body: Option<&str>,
    ) -> StatusCode {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("authorization", format!("Bearer {token}"));
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let resp = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        resp.status()
    }

    #[tokio::test]
    async fn test_set_then_clear_round_trip() {
        let store = seeded_store();
        let state = AppState::new(store.clone(), AuthConfig::default());
        let token = open_session(&state).await;

        let status = send(
            build_router(state.clone()),
            "PUT",
            "/api/club/games/1/score",
            &token,
            Some(r#"{"home": 3, "away": 1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let games = store.season_games(1).await.unwrap();
        assert_eq!(games[0].home_score, Some(3));
        assert_eq!(games[0].away_score, Some(1));

        let status = send(
            build_router(state),
            "DELETE",
            "/api/club/games/1/score",
            &token,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let games = store.season_games(1).await.unwrap();
        assert_eq!(games[0].home_score, None);
        assert_eq!(games[0].away_score, None);
    }

    #[tokio::test]
    async fn test_partial_scores_are_accepted() {
        let store = seeded_store();
        let state = AppState::new(store.clone(), AuthConfig::default());
        let token = open_session(&state).await;

        let status = send(
            build_router(state),
            "PUT",
            "/api/club/games/1/score",
            &token,
            Some(r#"{"home": 2, "away": null}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let games = store.season_games(1).await.unwrap();
        assert_eq!(games[0].home_score, Some(2));
        assert_eq!(games[0].away_score, None);
    }

    #[tokio::test]
    async fn test_mutations_emit_refresh_events() {
        let state = AppState::new(seeded_store(), AuthConfig::default());
        let token = open_session(&state).await;
        let mut events = state.schedule_events.subscribe();

        send(
            build_router(state.clone()),
            "PUT",
            "/api/club/games/1/score",
            &token,
            Some(r#"{"home": 1, "away": 0}"#),
        )
        .await;
        assert_eq!(
            events.try_recv().unwrap(),
            ScheduleRefresh::ScoreSet { game_id: 1 }
        );

        send(
            build_router(state),
            "DELETE",
            "/api/club/games/1/score",
            &token,
            None,
        )
        .await;
        assert_eq!(
            events.try_recv().unwrap(),
            ScheduleRefresh::ScoreCleared { game_id: 1 }
        );
    }

    #[tokio::test]
    async fn test_sample_mode_write_is_noop_but_still_signals() {
        let store = Arc::new(SampleStore::new());
        let state = AppState::new(store.clone(), AuthConfig::default());
        let token = open_session(&state).await;
        let mut events = state.schedule_events.subscribe();

        let status = send(
            build_router(state),
            "PUT",
            "/api/club/games/1/score",
            &token,
            Some(r#"{"home": 5, "away": 5}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        // The sample store ignored the write...
        let games = store.season_games(1).await.unwrap();
        assert_eq!(games[0].home_score, None);

        // ...but the schedule view is still told to refetch.
        assert!(events.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_score_edit_requires_session() {
        let state = AppState::new(seeded_store(), AuthConfig::default());
        let app = build_router(state);

        let resp = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/club/games/1/score")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"home": 1, "away": 1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
