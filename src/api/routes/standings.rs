use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{summarize, team_stats};
use crate::models::{StatEntry, StatField};

use super::roster::SeasonInfo;

/// One standings card: a statistic totaled and ranked across teams.
#[derive(Debug, Serialize)]
pub struct StatCard {
    pub category: &'static str,
    pub headline: String,
    pub total: i64,
    pub teams: Vec<StatEntry>,
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub season: SeasonInfo,
    pub cards: Vec<StatCard>,
}

/// Current-season standings: wins, losses, ties, goals for, goals against.
///
/// Recomputed from the full game list on every request.
pub async fn standings(State(state): State<AppState>) -> Result<Json<StandingsResponse>, ApiError> {
    let season = state
        .store
        .current_season()
        .await?
        .ok_or(ApiError::NoSeason)?;

    let games = state.store.season_games(season.id).await?;
    let teams = state.store.season_teams(season.id).await?;

    let stats = team_stats(&games, &teams);
    let cards = StatField::ALL
        .into_iter()
        .map(|field| {
            let summary = summarize(&stats, field);
            StatCard {
                category: field.label(),
                headline: format!("Total {}", field.label()),
                total: summary.total,
                teams: summary.ranked,
            }
        })
        .collect();

    Ok(Json(StandingsResponse {
        season: SeasonInfo::from(&season),
        cards,
    }))
}
