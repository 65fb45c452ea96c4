//! Registration, login, logout, and the current-user endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use super::{domain_error, error_json, unauthorized};
use crate::auth;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    /// Username or email.
    login: String,
    password: String,
}

/// POST /api/auth/register — create an account and start a session.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let username = req.username.trim();
    let email = req.email.trim();

    if let Err(e) = auth::validate_username(username) {
        return domain_error(e);
    }
    if let Err(e) = auth::validate_email(email) {
        return domain_error(e);
    }
    let password_hash = match auth::hash_password(&req.password) {
        Ok(hash) => hash,
        Err(e) => return domain_error(e),
    };

    let user_id = match state.store.create_user(username, email, &password_hash) {
        Ok(id) => id,
        Err(e) => return domain_error(e),
    };

    info!("Registered user {} ({})", username, user_id);

    let user = match state.store.get_user(user_id) {
        Ok(Some(user)) => user,
        Ok(None) => return error_json(StatusCode::INTERNAL_SERVER_ERROR, "User vanished"),
        Err(e) => return domain_error(e),
    };

    let token = state.create_session(user_id);

    (
        StatusCode::CREATED,
        [(header::SET_COOKIE, auth::session_cookie(&token))],
        Json(serde_json::json!({ "user": user })),
    )
        .into_response()
}

/// POST /api/auth/login — username or email plus password.
///
/// Unknown users and wrong passwords get the same response; a hash check runs
/// either way so the two cases take comparable time.
async fn login(State(state): State<Arc<AppState>>, Json(req): Json<LoginRequest>) -> Response {
    let user = match state.store.find_user_by_login(req.login.trim()) {
        Ok(user) => user,
        Err(e) => return domain_error(e),
    };

    let Some(user) = user else {
        // Burn a hash anyway so unknown users cost the same as bad passwords.
        let _ = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST);
        return error_json(StatusCode::UNAUTHORIZED, "Invalid credentials");
    };

    if !auth::verify_password(&req.password, &user.password_hash) {
        return error_json(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }

    let token = state.create_session(user.id);

    info!("User {} logged in", user.username);

    (
        StatusCode::OK,
        [(header::SET_COOKIE, auth::session_cookie(&token))],
        Json(serde_json::json!({ "user": user })),
    )
        .into_response()
}

/// POST /api/auth/logout — drop the session and clear the cookie.
async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Some(token) = auth::session_token(&headers) {
        state.remove_session(&token);
    }

    (
        StatusCode::OK,
        [(header::SET_COOKIE, auth::clear_session_cookie())],
        Json(serde_json::json!({ "success": true })),
    )
        .into_response()
}

/// GET /api/auth/me — the authenticated user.
async fn me(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    match state.current_user(&headers) {
        Some(user) => Json(serde_json::json!({ "user": user })).into_response(),
        None => unauthorized(),
    }
}
