//! Data types for users and saved ideas.

use serde::{Deserialize, Serialize};

/// A user row from the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: i64,
}

/// A saved idea row from the database.
///
/// `tech_stack` is stored comma-separated; `tech_stack_list` splits it back
/// into the ordered list form used by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub id: i64,
    pub user_id: i64,
    pub idea_text: String,
    pub startup_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Idea {
    /// Split the stored comma-separated tech stack into an ordered list.
    pub fn tech_stack_list(&self) -> Vec<String> {
        self.tech_stack
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// Fields for inserting a new idea.
#[derive(Debug, Clone, Default)]
pub struct NewIdea {
    pub idea_text: String,
    pub startup_name: String,
    pub tagline: Option<String>,
    pub tech_stack: Option<String>,
    pub sentiment: Option<String>,
    pub label: Option<String>,
}

/// Editable fields for an idea update. All editable fields are rewritten.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdeaUpdate {
    pub idea_text: String,
    pub startup_name: String,
    pub tagline: Option<String>,
    pub tech_stack: Option<String>,
    pub label: Option<String>,
}
