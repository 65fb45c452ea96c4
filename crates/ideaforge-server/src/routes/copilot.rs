//! Copilot advisory tool routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use super::{error_json, unauthorized};
use crate::state::AppState;
use ideaforge_llm::CopilotTool;
use ideaforge_pipeline::run_copilot;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/copilot/tools", get(list_tools))
        .route("/copilot/{key}", post(run_tool))
}

#[derive(Debug, Deserialize)]
struct CopilotRequest {
    input: String,
}

/// GET /api/copilot/tools — the fixed tool catalog.
async fn list_tools() -> Json<serde_json::Value> {
    let tools: Vec<serde_json::Value> = CopilotTool::ALL
        .iter()
        .map(|tool| {
            serde_json::json!({
                "key": tool.key(),
                "title": tool.title(),
                "cta": tool.cta(),
                "placeholder": tool.placeholder(),
            })
        })
        .collect();

    Json(serde_json::json!({ "tools": tools }))
}

/// POST /api/copilot/{key} — run one tool over the user's input.
async fn run_tool(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(key): Path<String>,
    Json(req): Json<CopilotRequest>,
) -> Response {
    if state.current_user(&headers).is_none() {
        return unauthorized();
    }

    let Some(tool) = CopilotTool::from_key(&key) else {
        return error_json(StatusCode::NOT_FOUND, format!("Unknown tool: {}", key));
    };

    let input = req.input.trim();
    if input.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "Input cannot be empty");
    }

    let report = run_copilot(&state.llm, tool, input).await;
    Json(report).into_response()
}
