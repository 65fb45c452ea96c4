//! Idea generation and owner-scoped CRUD.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use super::{domain_error, error_json, unauthorized};
use crate::state::AppState;
use ideaforge_classify::assign_label;
use ideaforge_pipeline::generate_idea;
use ideaforge_store::{IdeaUpdate, NewIdea};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ideas/generate", post(generate))
        .route("/ideas", post(save).get(list))
        .route(
            "/ideas/{id}",
            get(get_one).put(update).delete(delete_one),
        )
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    idea_text: String,
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SaveRequest {
    idea_text: String,
    startup_name: String,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    tech_stack: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

/// POST /api/ideas/generate — run the generation pipeline on an idea.
///
/// Validates before any external call; classification runs in-process and is
/// returned alongside the suggestion.
async fn generate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<GenerateRequest>,
) -> Response {
    if state.current_user(&headers).is_none() {
        return unauthorized();
    }

    let idea_text = req.idea_text.trim();
    if idea_text.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "Idea text cannot be empty");
    }

    let suggestion = generate_idea(&state.llm, idea_text, req.label.as_deref()).await;

    let sentiment = state.sentiment.classify(idea_text);
    let topics = state
        .topics
        .classify(idea_text, state.config.topic_threshold);

    Json(serde_json::json!({
        "idea_text": idea_text,
        "suggestion": suggestion,
        "sentiment": sentiment,
        "topics": topics,
    }))
    .into_response()
}

/// POST /api/ideas — persist an idea for the authenticated user.
///
/// Sentiment and a missing label are filled in here: the label falls back to
/// the offline keyword heuristic when neither the user nor the generation
/// step supplied one.
async fn save(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<SaveRequest>,
) -> Response {
    let Some(user) = state.current_user(&headers) else {
        return unauthorized();
    };

    let sentiment = state.sentiment.classify(&req.idea_text);
    let label = resolve_label(req.label.as_deref(), &req.idea_text);

    let new_idea = NewIdea {
        idea_text: req.idea_text,
        startup_name: req.startup_name,
        tagline: req.tagline,
        tech_stack: req.tech_stack,
        sentiment: Some(sentiment.as_str().to_string()),
        label: Some(label),
    };

    let id = match state.store.save_idea(user.id, &new_idea) {
        Ok(id) => id,
        Err(e) => return domain_error(e),
    };

    info!("User {} saved idea {}", user.id, id);

    match state.store.get_idea(id, user.id) {
        Ok(Some(idea)) => (StatusCode::CREATED, Json(idea)).into_response(),
        Ok(None) => error_json(StatusCode::INTERNAL_SERVER_ERROR, "Idea vanished"),
        Err(e) => domain_error(e),
    }
}

/// Label precedence at save time: a caller-supplied label wins verbatim; a
/// missing or blank one is filled by the offline keyword heuristic.
fn resolve_label(requested: Option<&str>, idea_text: &str) -> String {
    requested
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| assign_label(idea_text).to_string())
}

/// GET /api/ideas — all of the authenticated user's ideas.
async fn list(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let Some(user) = state.current_user(&headers) else {
        return unauthorized();
    };

    match state.store.list_ideas(user.id) {
        Ok(ideas) => Json(ideas).into_response(),
        Err(e) => domain_error(e),
    }
}

/// GET /api/ideas/{id} — a single idea; 404 for other owners' records.
async fn get_one(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let Some(user) = state.current_user(&headers) else {
        return unauthorized();
    };

    match state.store.get_idea(id, user.id) {
        Ok(Some(idea)) => Json(idea).into_response(),
        Ok(None) => error_json(StatusCode::NOT_FOUND, "Idea not found"),
        Err(e) => domain_error(e),
    }
}

/// PUT /api/ideas/{id} — rewrite editable fields.
async fn update(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(req): Json<IdeaUpdate>,
) -> Response {
    let Some(user) = state.current_user(&headers) else {
        return unauthorized();
    };

    if req.idea_text.trim().is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "Idea text cannot be empty");
    }
    if req.startup_name.trim().is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "Startup name cannot be empty");
    }

    match state.store.update_idea(id, user.id, &req) {
        Ok(true) => match state.store.get_idea(id, user.id) {
            Ok(Some(idea)) => Json(idea).into_response(),
            Ok(None) => error_json(StatusCode::NOT_FOUND, "Idea not found"),
            Err(e) => domain_error(e),
        },
        Ok(false) => error_json(StatusCode::NOT_FOUND, "Idea not found"),
        Err(e) => domain_error(e),
    }
}

/// DELETE /api/ideas/{id}.
async fn delete_one(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let Some(user) = state.current_user(&headers) else {
        return unauthorized();
    };

    match state.store.delete_idea(id, user.id) {
        Ok(true) => Json(serde_json::json!({ "success": true })).into_response(),
        Ok(false) => error_json(StatusCode::NOT_FOUND, "Idea not found"),
        Err(e) => domain_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_label_filled_by_heuristic() {
        assert_eq!(
            resolve_label(None, "AI-powered tutoring platform for kids"),
            "AI/ML"
        );
        assert_eq!(resolve_label(None, "payment rails for freelancers"), "FinTech");
        assert_eq!(resolve_label(None, "a dog walking service"), "General");
    }

    #[test]
    fn test_blank_label_treated_as_missing() {
        assert_eq!(resolve_label(Some(""), "medical records app"), "HealthTech");
        assert_eq!(resolve_label(Some("   "), "medical records app"), "HealthTech");
    }

    #[test]
    fn test_supplied_label_wins() {
        assert_eq!(
            resolve_label(Some("My Custom Label"), "an ai thing"),
            "My Custom Label"
        );
        assert_eq!(resolve_label(Some("  Logistics "), "an ai thing"), "Logistics");
    }
}
