//! REST API endpoints.
//!
//! Axum-based HTTP API for the club section: roster, standings, the
//! editable schedule, and session management. All club routes require an
//! open session; score edits additionally emit a refresh signal consumed
//! by schedule views.

use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::store::StoreError;

pub mod auth;
pub mod routes;
pub mod state;

use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("No current season is available")]
    NoSeason,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::NoSeason => (StatusCode::INTERNAL_SERVER_ERROR, "NO_CURRENT_SEASON"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Assemble the full application router.
pub fn build_router(state: AppState) -> Router {
    let club = Router::new()
        .route("/roster", get(routes::roster::roster))
        .route("/standings", get(routes::standings::standings))
        .route("/schedule", get(routes::schedule::schedule))
        .route(
            "/games/:id/score",
            put(routes::scores::set_score).delete(routes::scores::clear_score),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    Router::new()
        .route("/health", get(routes::meta::health))
        .route("/api/session", post(auth::login).delete(auth::logout))
        .nest("/api/club", club)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
