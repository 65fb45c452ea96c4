//! SQLite store for users and saved ideas.
//!
//! Every idea operation is scoped to the requesting owner's user id. A lookup
//! for a record owned by someone else behaves exactly like a lookup for a
//! record that does not exist.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use crate::schema::SCHEMA_SQL;
use crate::types::*;
use ideaforge_core::{now_millis, Error, Result};

/// SQLite-backed store. A single connection behind a mutex; requests block
/// briefly on each other, which is fine for single-row reads and writes.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl SqliteStore {
    /// Open or create the store. `db_dir` is the directory; the file will be
    /// `db_dir/ideaforge.db`.
    pub fn open(db_dir: impl AsRef<Path>) -> Result<Self> {
        let db_dir = db_dir.as_ref();
        std::fs::create_dir_all(db_dir).map_err(|e| Error::Database(e.to_string()))?;
        let db_path = db_dir.join("ideaforge.db");

        let conn = Self::create_connection(&db_path)?;
        Self::init_schema(&conn)?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };

        let user_count = store.count_users()?;
        let idea_count = store.count_ideas()?;
        info!(
            "SqliteStore initialized: {} users, {} ideas, path={}",
            user_count,
            idea_count,
            store.db_path.display()
        );

        Ok(store)
    }

    fn create_connection(db_path: &Path) -> Result<Connection> {
        let conn = Connection::open(db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA foreign_keys = ON;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        Ok(conn)
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;
        Ok(())
    }

    // ---------------------------------------------------------------
    // Users
    // ---------------------------------------------------------------

    /// Insert a user. Returns the new user ID.
    pub fn create_user(&self, username: &str, email: &str, password_hash: &str) -> Result<i64> {
        let now = now_millis();
        let conn = self.conn.lock();
        let id = conn
            .prepare_cached(
                "INSERT INTO users (username, email, password_hash, created_at) \
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .insert(params![username, email, password_hash, now])
            .map_err(|e| {
                if e.to_string().contains("UNIQUE constraint") {
                    Error::Duplicate("username or email already exists".into())
                } else {
                    Error::Database(e.to_string())
                }
            })?;
        Ok(id)
    }

    /// Find a user by username or email (login accepts either).
    pub fn find_user_by_login(&self, login: &str) -> Result<Option<User>> {
        let conn = self.conn.lock();
        let row = conn
            .prepare_cached("SELECT * FROM users WHERE username = ?1 OR email = ?1")
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![login], |row| Ok(Self::row_to_user(row)))
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(row)
    }

    /// Get a user by ID.
    pub fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let conn = self.conn.lock();
        let row = conn
            .prepare_cached("SELECT * FROM users WHERE id = ?1")
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![user_id], |row| Ok(Self::row_to_user(row)))
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(row)
    }

    /// Delete a user. Their ideas cascade.
    pub fn delete_user(&self, user_id: i64) -> Result<bool> {
        let conn = self.conn.lock();
        let count = conn
            .execute("DELETE FROM users WHERE id = ?1", params![user_id])
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(count > 0)
    }

    /// Count total users.
    pub fn count_users(&self) -> Result<i64> {
        let conn = self.conn.lock();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(count)
    }

    // ---------------------------------------------------------------
    // Ideas
    // ---------------------------------------------------------------

    /// Insert a new idea for `owner`. Rejects empty required fields before
    /// touching the database.
    pub fn save_idea(&self, owner: i64, idea: &NewIdea) -> Result<i64> {
        if idea.idea_text.trim().is_empty() {
            return Err(Error::Validation("idea_text must not be empty".into()));
        }
        if idea.startup_name.trim().is_empty() {
            return Err(Error::Validation("startup_name must not be empty".into()));
        }

        let now = now_millis();
        let conn = self.conn.lock();
        let id = conn
            .prepare_cached(
                "INSERT INTO ideas (user_id, idea_text, startup_name, tagline, tech_stack, \
                 sentiment, label, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .insert(params![
                owner,
                idea.idea_text,
                idea.startup_name,
                idea.tagline,
                idea.tech_stack,
                idea.sentiment,
                idea.label,
                now,
                now,
            ])
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(id)
    }

    /// All ideas belonging to `owner`, stable by primary key.
    pub fn list_ideas(&self, owner: i64) -> Result<Vec<Idea>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached("SELECT * FROM ideas WHERE user_id = ?1 ORDER BY id")
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![owner], |row| Ok(Self::row_to_idea(row)))
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows.filter_map(|r| r.ok()).collect())
    }

    /// Get an idea only if it belongs to `owner`.
    pub fn get_idea(&self, id: i64, owner: i64) -> Result<Option<Idea>> {
        let conn = self.conn.lock();
        let row = conn
            .prepare_cached("SELECT * FROM ideas WHERE id = ?1 AND user_id = ?2")
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![id, owner], |row| Ok(Self::row_to_idea(row)))
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(row)
    }

    /// Rewrite all editable fields and refresh `updated_at`. Returns false
    /// when the idea does not exist or is not owned by `owner`.
    pub fn update_idea(&self, id: i64, owner: i64, update: &IdeaUpdate) -> Result<bool> {
        if update.idea_text.trim().is_empty() {
            return Err(Error::Validation("idea_text must not be empty".into()));
        }
        if update.startup_name.trim().is_empty() {
            return Err(Error::Validation("startup_name must not be empty".into()));
        }

        let now = now_millis();
        let conn = self.conn.lock();
        let count = conn
            .execute(
                "UPDATE ideas SET idea_text = ?1, startup_name = ?2, tagline = ?3, \
                 tech_stack = ?4, label = ?5, updated_at = ?6 \
                 WHERE id = ?7 AND user_id = ?8",
                params![
                    update.idea_text,
                    update.startup_name,
                    update.tagline,
                    update.tech_stack,
                    update.label,
                    now,
                    id,
                    owner,
                ],
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(count > 0)
    }

    /// Delete an idea only if owned by `owner`.
    pub fn delete_idea(&self, id: i64, owner: i64) -> Result<bool> {
        let conn = self.conn.lock();
        let count = conn
            .execute(
                "DELETE FROM ideas WHERE id = ?1 AND user_id = ?2",
                params![id, owner],
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(count > 0)
    }

    /// Count total ideas.
    pub fn count_ideas(&self) -> Result<i64> {
        let conn = self.conn.lock();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM ideas", [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(count)
    }

    // ---------------------------------------------------------------
    // Row mapping helpers
    // ---------------------------------------------------------------

    fn row_to_user(row: &rusqlite::Row<'_>) -> User {
        User {
            id: row.get("id").unwrap_or(0),
            username: row.get("username").unwrap_or_default(),
            email: row.get("email").unwrap_or_default(),
            password_hash: row.get("password_hash").unwrap_or_default(),
            created_at: row.get("created_at").unwrap_or(0),
        }
    }

    fn row_to_idea(row: &rusqlite::Row<'_>) -> Idea {
        Idea {
            id: row.get("id").unwrap_or(0),
            user_id: row.get("user_id").unwrap_or(0),
            idea_text: row.get("idea_text").unwrap_or_default(),
            startup_name: row.get("startup_name").unwrap_or_default(),
            tagline: row.get("tagline").ok().flatten(),
            tech_stack: row.get("tech_stack").ok().flatten(),
            sentiment: row.get("sentiment").ok().flatten(),
            label: row.get("label").ok().flatten(),
            created_at: row.get("created_at").unwrap_or(0),
            updated_at: row.get("updated_at").unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (SqliteStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path()).unwrap();
        (store, dir)
    }

    fn sample_idea() -> NewIdea {
        NewIdea {
            idea_text: "AI-powered tutoring platform for kids".into(),
            startup_name: "TutorX".into(),
            tagline: Some("Learning that listens".into()),
            tech_stack: Some("Rust, Axum, SQLite".into()),
            sentiment: Some("positive".into()),
            label: Some("AI/ML".into()),
        }
    }

    #[test]
    fn test_create_and_find_user() {
        let (store, _dir) = test_store();

        let id = store.create_user("ada", "ada@example.com", "hash").unwrap();

        let by_name = store.find_user_by_login("ada").unwrap().unwrap();
        assert_eq!(by_name.id, id);
        let by_email = store.find_user_by_login("ada@example.com").unwrap().unwrap();
        assert_eq!(by_email.id, id);
        assert!(store.find_user_by_login("nobody").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_username() {
        let (store, _dir) = test_store();

        store.create_user("ada", "ada@example.com", "hash").unwrap();
        let result = store.create_user("ada", "other@example.com", "hash");
        assert!(matches!(result, Err(Error::Duplicate(_))));
    }

    #[test]
    fn test_save_and_get_idea() {
        let (store, _dir) = test_store();
        let owner = store.create_user("ada", "ada@example.com", "hash").unwrap();

        let id = store.save_idea(owner, &sample_idea()).unwrap();

        let idea = store.get_idea(id, owner).unwrap().unwrap();
        assert_eq!(idea.startup_name, "TutorX");
        assert_eq!(idea.tech_stack_list(), vec!["Rust", "Axum", "SQLite"]);
        assert_eq!(idea.created_at, idea.updated_at);
    }

    #[test]
    fn test_save_rejects_empty_fields() {
        let (store, _dir) = test_store();
        let owner = store.create_user("ada", "ada@example.com", "hash").unwrap();

        let mut idea = sample_idea();
        idea.idea_text = "  ".into();
        assert!(matches!(
            store.save_idea(owner, &idea),
            Err(Error::Validation(_))
        ));

        let mut idea = sample_idea();
        idea.startup_name = String::new();
        assert!(matches!(
            store.save_idea(owner, &idea),
            Err(Error::Validation(_))
        ));
        assert_eq!(store.count_ideas().unwrap(), 0);
    }

    #[test]
    fn test_get_idea_not_leaked_across_owners() {
        let (store, _dir) = test_store();
        let ada = store.create_user("ada", "ada@example.com", "hash").unwrap();
        let bob = store.create_user("bob", "bob@example.com", "hash").unwrap();

        let id = store.save_idea(ada, &sample_idea()).unwrap();

        assert!(store.get_idea(id, bob).unwrap().is_none());
        assert!(store.get_idea(id, ada).unwrap().is_some());
    }

    #[test]
    fn test_delete_by_non_owner_is_noop() {
        let (store, _dir) = test_store();
        let ada = store.create_user("ada", "ada@example.com", "hash").unwrap();
        let bob = store.create_user("bob", "bob@example.com", "hash").unwrap();

        let id = store.save_idea(ada, &sample_idea()).unwrap();

        assert!(!store.delete_idea(id, bob).unwrap());
        assert!(store.get_idea(id, ada).unwrap().is_some());

        assert!(store.delete_idea(id, ada).unwrap());
        assert!(store.get_idea(id, ada).unwrap().is_none());
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let (store, _dir) = test_store();
        let owner = store.create_user("ada", "ada@example.com", "hash").unwrap();
        let id = store.save_idea(owner, &sample_idea()).unwrap();

        // Timestamps are millisecond-resolution
        std::thread::sleep(std::time::Duration::from_millis(5));

        let update = IdeaUpdate {
            idea_text: "AI-powered tutoring platform for kids".into(),
            startup_name: "TutorPrime".into(),
            tagline: Some("New tagline".into()),
            tech_stack: Some("Rust, Axum".into()),
            label: Some("EdTech".into()),
        };
        assert!(store.update_idea(id, owner, &update).unwrap());

        let idea = store.get_idea(id, owner).unwrap().unwrap();
        assert_eq!(idea.startup_name, "TutorPrime");
        assert_eq!(idea.label.as_deref(), Some("EdTech"));
        assert!(idea.updated_at > idea.created_at);
    }

    #[test]
    fn test_update_by_non_owner_is_noop() {
        let (store, _dir) = test_store();
        let ada = store.create_user("ada", "ada@example.com", "hash").unwrap();
        let bob = store.create_user("bob", "bob@example.com", "hash").unwrap();
        let id = store.save_idea(ada, &sample_idea()).unwrap();

        let update = IdeaUpdate {
            idea_text: "hijacked".into(),
            startup_name: "Hijack".into(),
            ..Default::default()
        };
        assert!(!store.update_idea(id, bob, &update).unwrap());

        let idea = store.get_idea(id, ada).unwrap().unwrap();
        assert_eq!(idea.startup_name, "TutorX");
    }

    #[test]
    fn test_list_ideas_scoped_and_stable() {
        let (store, _dir) = test_store();
        let ada = store.create_user("ada", "ada@example.com", "hash").unwrap();
        let bob = store.create_user("bob", "bob@example.com", "hash").unwrap();

        for i in 0..3 {
            let mut idea = sample_idea();
            idea.startup_name = format!("Idea{}", i);
            store.save_idea(ada, &idea).unwrap();
        }
        store.save_idea(bob, &sample_idea()).unwrap();

        let ideas = store.list_ideas(ada).unwrap();
        assert_eq!(ideas.len(), 3);
        assert!(ideas.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_delete_user_cascades_ideas() {
        let (store, _dir) = test_store();
        let ada = store.create_user("ada", "ada@example.com", "hash").unwrap();
        store.save_idea(ada, &sample_idea()).unwrap();
        store.save_idea(ada, &sample_idea()).unwrap();

        assert_eq!(store.count_ideas().unwrap(), 2);
        store.delete_user(ada).unwrap();
        assert_eq!(store.count_ideas().unwrap(), 0);
    }
}
