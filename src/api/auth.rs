//! Session handling for the club section.
//!
//! Two configured credential pairs (community and admin) gate `/api/club`.
//! A successful login mints a random bearer token held in memory; the
//! middleware checks it on every gated request. Sessions do not survive a
//! restart, which is fine for a club of this size.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use super::state::AppState;
use super::ApiError;

/// Which credential pair a session was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

/// Constant-time string comparison.
///
/// Pads both sides to the same length so the comparison always runs over
/// the same number of bytes, then folds the length check in at the end.
fn constant_time_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();

    let max_len = a.len().max(b.len());
    let mut padded_a = vec![0u8; max_len];
    let mut padded_b = vec![0u8; max_len];
    padded_a[..a.len()].copy_from_slice(a);
    padded_b[..b.len()].copy_from_slice(b);

    let bytes_match: bool = padded_a.ct_eq(&padded_b).into();
    bytes_match && a.len() == b.len()
}

/// A credential pair with an empty password never matches.
fn credentials_match(expected_user: &str, expected_pass: &str, user: &str, pass: &str) -> bool {
    if expected_pass.is_empty() {
        return false;
    }
    constant_time_eq(expected_user, user) & constant_time_eq(expected_pass, pass)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    Some(value.strip_prefix("Bearer ").unwrap_or(value))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let auth = &state.auth;

    let role = if credentials_match(
        &auth.club_username,
        &auth.club_password,
        &request.username,
        &request.password,
    ) {
        Role::Member
    } else if credentials_match(
        &auth.admin_username,
        &auth.admin_password,
        &request.username,
        &request.password,
    ) {
        Role::Admin
    } else {
        tracing::warn!(username = %request.username, "login rejected");
        return Err(ApiError::Unauthorized("invalid credentials".to_string()));
    };

    let token = Uuid::new_v4().to_string();
    state.sessions.write().await.insert(token.clone(), role);
    tracing::info!(?role, "session opened");

    Ok(Json(LoginResponse { token, role }))
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.write().await.remove(token);
    }
    StatusCode::NO_CONTENT
}

/// Middleware gating the club section behind an open session.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())
        .map(str::to_string)
        .ok_or_else(|| ApiError::Unauthorized("missing session token".to_string()))?;

    if !state.sessions.read().await.contains_key(&token) {
        return Err(ApiError::Unauthorized(
            "invalid or expired session token".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
