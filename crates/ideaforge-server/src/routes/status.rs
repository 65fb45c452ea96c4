//! Status and LLM provider configuration routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use super::{error_json, unauthorized};
use crate::state::AppState;
use ideaforge_llm::LLMConfig;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(get_status))
        .route("/config/llm", get(get_llm_config).put(update_llm_config))
}

/// GET /api/status — health and feature report.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let users = state.store.count_users().unwrap_or(0);
    let ideas = state.store.count_ideas().unwrap_or(0);

    Json(serde_json::json!({
        "status": "ok",
        "llmConfigured": state.llm.is_configured(),
        "sentimentModel": state.sentiment.is_available(),
        "topicModel": state.topics.is_available(),
        "users": users,
        "ideas": ideas,
        "port": state.config.port,
    }))
}

/// GET /api/config/llm — provider config with masked keys.
async fn get_llm_config(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if state.current_user(&headers).is_none() {
        return unauthorized();
    }

    Json(state.llm.config_response()).into_response()
}

/// PUT /api/config/llm — replace and persist the provider config.
async fn update_llm_config(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(mut config): Json<LLMConfig>,
) -> Response {
    if state.current_user(&headers).is_none() {
        return unauthorized();
    }

    // The deserialized config has no file path; pin it to ours before saving.
    config.config_path = state.config.data_paths.llm_config_file.clone();

    if let Err(e) = state.llm.update_config(config) {
        return error_json(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to save config: {}", e),
        );
    }

    Json(state.llm.config_response()).into_response()
}
