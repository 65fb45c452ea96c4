//! HTTP route handlers — JSON API under /api.

pub mod auth;
pub mod copilot;
pub mod ideas;
pub mod status;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::state::AppState;
use ideaforge_core::Error;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(status::routes())
        .merge(auth::routes())
        .merge(ideas::routes())
        .merge(copilot::routes())
}

/// Standard JSON error body.
pub(crate) fn error_json(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "error": message.into() })),
    )
        .into_response()
}

pub(crate) fn unauthorized() -> Response {
    error_json(StatusCode::UNAUTHORIZED, "Not authenticated")
}

/// Map a domain error to an HTTP response. Internal details stay in the logs.
pub(crate) fn domain_error(e: Error) -> Response {
    match e {
        Error::Validation(msg) => error_json(StatusCode::BAD_REQUEST, msg),
        Error::Duplicate(msg) => error_json(StatusCode::CONFLICT, msg),
        Error::NotFound(msg) => error_json(StatusCode::NOT_FOUND, msg),
        other => {
            tracing::error!("Request failed: {}", other);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
