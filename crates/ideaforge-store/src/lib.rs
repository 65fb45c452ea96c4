//! IdeaForge Store — SQLite persistence for users and saved ideas.

pub mod schema;
pub mod sqlite;
pub mod types;

pub use sqlite::SqliteStore;
pub use types::{Idea, IdeaUpdate, NewIdea, User};
