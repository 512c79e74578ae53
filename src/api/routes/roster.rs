use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::group_users_by_team;
use crate::models::{FlagKey, Season, SeasonId, TeamId, UserId};

/// Season header shared by the club views.
#[derive(Debug, Serialize)]
pub struct SeasonInfo {
    pub id: SeasonId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Dates rendered M/D/YYYY for the page header
    pub start_text: String,
    pub end_text: String,
}

impl From<&Season> for SeasonInfo {
    fn from(season: &Season) -> Self {
        Self {
            id: season.id,
            name: season.name.clone(),
            start_date: season.start_date,
            end_date: season.end_date,
            start_text: season.start_date.format("%-m/%-d/%Y").to_string(),
            end_text: season.end_date.format("%-m/%-d/%Y").to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RosterRow {
    pub user_id: UserId,
    pub name: String,
    pub username: String,
    pub team_id: TeamId,
    pub team: String,
    /// Concrete CSS color for the team cell
    pub team_color: &'static str,
    pub team_flag: FlagKey,
}

#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub season: SeasonInfo,
    pub players: Vec<RosterRow>,
}

/// Current-season roster, grouped by team assignment.
pub async fn roster(State(state): State<AppState>) -> Result<Json<RosterResponse>, ApiError> {
    let season = state
        .store
        .current_season()
        .await?
        .ok_or(ApiError::NoSeason)?;

    let users = state.store.season_users(season.id).await?;
    let teams = state.store.season_teams(season.id).await?;
    let assignments = state.store.season_assignments(season.id).await?;

    let players = group_users_by_team(&users, &assignments, &teams)
        .into_iter()
        .map(|entry| RosterRow {
            user_id: entry.user.id,
            name: entry.user.name,
            username: entry.user.username,
            team_id: entry.team.id,
            team: entry.team.name,
            team_color: entry.team.color.css(),
            team_flag: entry.team.flag,
        })
        .collect();

    Ok(Json(RosterResponse {
        season: SeasonInfo::from(&season),
        players,
    }))
}
