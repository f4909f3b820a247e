use uuid::Uuid;

use wideseek_models::{Message, Role};

use crate::chat::config::{ConfigError, ConfigUpdate, SessionConfig};
use crate::chat::history::{history_window, Exchange};

/// Session-scoped state: transcript, replayable memory, and settings.
///
/// One store per session. It is created by [`SessionStore::initialize`] and
/// the session ends when it is dropped; nothing is persisted.
#[derive(Debug)]
pub struct SessionStore {
    id: Uuid,
    transcript: Vec<Message>,
    memory: Vec<Exchange>,
    config: SessionConfig,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::initialize()
    }
}

impl SessionStore {
    /// Fresh session: the greeting as the only message and default settings.
    pub fn initialize() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Fresh session with start-up settings already resolved
    pub fn with_config(config: SessionConfig) -> Self {
        let store = Self {
            id: Uuid::new_v4(),
            transcript: vec![Message::greeting()],
            memory: Vec::new(),
            config,
        };
        log::info!("session {} started (model {})", store.id, store.config.model());
        store
    }

    pub fn session_id(&self) -> Uuid {
        self.id
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of completed exchanges since the last clear
    pub fn turn_count(&self) -> usize {
        self.memory.len()
    }

    pub fn append_message(&mut self, role: Role, content: impl Into<String>) {
        self.transcript.push(Message::new(role, content));
    }

    pub fn update_config(&mut self, update: ConfigUpdate) -> Result<(), ConfigError> {
        self.config.apply(update)?;
        log::debug!(
            "session {} config: model={} temperature={} max_tokens={} key={}",
            self.id,
            self.config.model(),
            self.config.temperature(),
            self.config.max_tokens(),
            self.config.api_key()
        );
        Ok(())
    }

    /// Back to the single greeting. Settings and the API key are kept.
    pub fn clear(&mut self) {
        self.transcript = vec![Message::greeting()];
        self.memory.clear();
        log::info!("session {} history cleared", self.id);
    }

    /// Remember a successful exchange for replay on later turns
    pub fn record_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.memory.push(Exchange::new(user, assistant));
    }

    /// Prior turns to send with the next request, bounded by `history_turns`
    pub fn history_window(&self) -> Vec<Message> {
        history_window(&self.memory, self.config.history_turns())
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        log::info!("session {} ended after {} messages", self.id, self.transcript.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wideseek_models::{ModelName, GREETING};

    #[test]
    fn test_initialize_yields_single_greeting() {
        let store = SessionStore::initialize();
        assert_eq!(store.transcript(), &[Message::assistant(GREETING)]);
        assert_eq!(store.config(), &SessionConfig::default());
        assert_eq!(store.turn_count(), 0);
    }

    #[test]
    fn test_append_preserves_fifo_order() {
        let mut store = SessionStore::initialize();
        for i in 0..10 {
            let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
            store.append_message(role, format!("m{}", i));
        }

        assert_eq!(store.transcript().len(), 11);
        let contents: Vec<&str> = store.transcript()[1..].iter().map(|m| m.content()).collect();
        let expected: Vec<String> = (0..10).map(|i| format!("m{}", i)).collect();
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_clear_restores_greeting_and_keeps_config() {
        let mut store = SessionStore::initialize();
        store
            .update_config(ConfigUpdate::default().api_key("sk-keep-me-please-123").model(ModelName::Gpt4).temperature(1.2))
            .unwrap();
        let config_before = store.config().clone();
        for i in 0..7 {
            store.append_message(Role::User, format!("q{}", i));
            store.record_exchange(format!("q{}", i), format!("a{}", i));
        }

        store.clear();

        assert_eq!(store.transcript(), &[Message::greeting()]);
        assert_eq!(store.config(), &config_before);
        assert_eq!(store.turn_count(), 0);
        assert!(store.history_window().is_empty());
    }

    #[test]
    fn test_clear_on_fresh_session_is_noop() {
        let mut store = SessionStore::initialize();
        store.clear();
        store.clear();
        assert_eq!(store.transcript(), &[Message::greeting()]);
    }

    #[test]
    fn test_config_update_is_idempotent() {
        let mut once = SessionStore::initialize();
        once.update_config(ConfigUpdate::default().temperature(1.2)).unwrap();

        let mut twice = SessionStore::initialize();
        twice.update_config(ConfigUpdate::default().temperature(1.2)).unwrap();
        twice.update_config(ConfigUpdate::default().temperature(1.2)).unwrap();

        assert_eq!(once.config(), twice.config());
        assert_eq!(twice.config().temperature(), 1.2);
    }

    #[test]
    fn test_rejected_update_keeps_previous_config() {
        let mut store = SessionStore::initialize();
        assert!(store.update_config(ConfigUpdate::default().max_tokens(5000)).is_err());
        assert_eq!(store.config().max_tokens(), 1000);
    }

    #[test]
    fn test_history_window_respects_configured_turns() {
        let mut store = SessionStore::with_config(SessionConfig::default().with_history_turns(1));
        store.record_exchange("old", "old reply");
        store.record_exchange("new", "new reply");

        assert_eq!(
            store.history_window(),
            vec![Message::user("new"), Message::assistant("new reply")]
        );
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(SessionStore::initialize().session_id(), SessionStore::initialize().session_id());
    }
}
