//! Database schema SQL.

/// Core tables: users and their saved ideas.
///
/// Ideas cascade-delete with their owning user. Ownership checks live in the
/// store's queries, not in the schema.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    created_at INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS ideas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    idea_text TEXT NOT NULL,
    startup_name TEXT NOT NULL,
    tagline TEXT,
    tech_stack TEXT,
    sentiment TEXT,
    label TEXT,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_ideas_user_id ON ideas(user_id);
"#;
