//! Shared application state.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::auth::{self, SESSION_TTL_MILLIS};
use ideaforge_classify::{SentimentBackend, TopicBackend};
use ideaforge_core::{now_millis, ForgeConfig};
use ideaforge_llm::GenAiClient;
use ideaforge_store::{SqliteStore, User};

/// An active login session.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub expires_at: i64,
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: ForgeConfig,
    pub store: SqliteStore,
    pub sentiment: Arc<dyn SentimentBackend>,
    pub topics: Arc<dyn TopicBackend>,
    pub llm: GenAiClient,
    sessions: RwLock<HashMap<String, Session>>,
}

impl AppState {
    pub fn new(
        config: ForgeConfig,
        store: SqliteStore,
        sentiment: Arc<dyn SentimentBackend>,
        topics: Arc<dyn TopicBackend>,
        llm: GenAiClient,
    ) -> Self {
        Self {
            config,
            store,
            sentiment,
            topics,
            llm,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a session for a user and return its token. Expired sessions
    /// are swept here so abandoned tokens don't accumulate.
    pub fn create_session(&self, user_id: i64) -> String {
        let token = auth::generate_session_token();
        let now = now_millis();
        let mut sessions = self.sessions.write();
        sessions.retain(|_, session| session.expires_at > now);
        sessions.insert(
            token.clone(),
            Session {
                user_id,
                expires_at: now + SESSION_TTL_MILLIS,
            },
        );
        token
    }

    /// Resolve a token to a user id. Expired sessions are evicted on access.
    pub fn session_user(&self, token: &str) -> Option<i64> {
        let now = now_millis();
        let mut sessions = self.sessions.write();
        match sessions.get(token) {
            Some(session) if session.expires_at > now => Some(session.user_id),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    pub fn remove_session(&self, token: &str) {
        self.sessions.write().remove(token);
    }

    /// Look up the authenticated user for a request, if any.
    pub fn current_user(&self, headers: &axum::http::HeaderMap) -> Option<User> {
        let token = auth::session_token(headers)?;
        let user_id = self.session_user(&token)?;
        self.store.get_user(user_id).ok().flatten()
    }

    #[cfg(test)]
    pub fn expire_session(&self, token: &str) {
        if let Some(session) = self.sessions.write().get_mut(token) {
            session.expires_at = now_millis() - 1;
        }
    }

    #[cfg(test)]
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideaforge_classify::{NeutralSentiment, NoopTopics};
    use ideaforge_llm::LLMConfig;
    use tempfile::TempDir;

    fn test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().unwrap();
        let config = ForgeConfig::from_env(dir.path()).unwrap();
        let store = SqliteStore::open(&config.data_paths.db).unwrap();
        let llm = GenAiClient::new(LLMConfig::default());
        let state = AppState::new(
            config,
            store,
            Arc::new(NeutralSentiment),
            Arc::new(NoopTopics),
            llm,
        );
        (state, dir)
    }

    #[test]
    fn test_session_lifecycle() {
        let (state, _dir) = test_state();

        let token = state.create_session(42);
        assert_eq!(state.session_user(&token), Some(42));

        state.remove_session(&token);
        assert_eq!(state.session_user(&token), None);
    }

    #[test]
    fn test_expired_session_evicted() {
        let (state, _dir) = test_state();

        let token = state.create_session(7);
        state.expire_session(&token);

        assert_eq!(state.session_user(&token), None);
        // Eviction means a second lookup also misses.
        assert_eq!(state.session_user(&token), None);
    }

    #[test]
    fn test_create_sweeps_abandoned_sessions() {
        let (state, _dir) = test_state();

        let stale = state.create_session(1);
        state.expire_session(&stale);

        // The next create drops every expired entry, presented or not.
        let fresh = state.create_session(2);
        assert_eq!(state.session_count(), 1);
        assert_eq!(state.session_user(&stale), None);
        assert_eq!(state.session_user(&fresh), Some(2));
    }

    #[test]
    fn test_unknown_token_rejected() {
        let (state, _dir) = test_state();
        assert_eq!(state.session_user("no-such-token"), None);
    }
}
