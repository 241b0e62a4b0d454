//! Login, logout and session status.
//!
//! Sessions live in memory and are referenced by an HttpOnly cookie. The API
//! routes themselves do not require a session.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;

use logbook_core::auth::{
    verify_credentials, LoginRequest, LoginResponse, SessionId, SessionStatus, SessionUser,
};

use crate::{handlers::ApiError, sessions::SESSION_COOKIE, state::AppState};

/// Log in with the configured credentials (POST /api/auth/login).
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    let Json(payload) = payload?;

    verify_credentials(&payload, &state.credentials)?;

    let session = state.sessions.create(&payload.username).await;

    let cookie = Cookie::build((SESSION_COOKIE, session.id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    tracing::info!(username = %session.username, "User logged in");

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            success: true,
            user: SessionUser {
                username: session.username,
            },
        }),
    ))
}

/// Report whether the cookie refers to a live session (GET /api/auth/session).
pub async fn session_status(State(state): State<AppState>, jar: CookieJar) -> Json<SessionStatus> {
    let session = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            state
                .sessions
                .get(&SessionId::new(cookie.value().to_string()))
                .await
        }
        None => None,
    };

    Json(
        session
            .as_ref()
            .map(SessionStatus::for_session)
            .unwrap_or_else(SessionStatus::anonymous),
    )
}

/// Drop the session and clear its cookie (POST /api/auth/logout).
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let session_id = SessionId::new(cookie.value().to_string());
        state.sessions.delete(&session_id).await;
        tracing::info!("User logged out");
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, StatusCode::NO_CONTENT)
}
