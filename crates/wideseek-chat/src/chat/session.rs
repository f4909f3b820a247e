use std::sync::Arc;

use wideseek_llm_api::{CompletionClient, CompletionError, CompletionRequest};
use wideseek_models::Role;

use crate::chat::config::{ConfigError, ConfigUpdate};
use crate::chat::state::SessionStore;

/// Prefix of the assistant message recorded when a turn fails
pub const ERROR_REPLY_PREFIX: &str = "Sorry, I ran into an error: ";

/// Where the session is within a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    AwaitingResponse,
}

/// Notifications for whoever renders the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    TurnStateChanged(TurnState),
    TranscriptChanged { len: usize },
    ConfigChanged,
}

/// Receives session events. The store is passed along so a renderer can
/// pull whatever it needs.
pub trait SessionObserver: Send {
    fn on_event(&mut self, event: &SessionEvent, store: &SessionStore);
}

/// Reasons a submission is refused before anything is recorded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("no API key set; enter your API key before chatting")]
    MissingApiKey,
    #[error("message is empty")]
    EmptyInput,
}

/// How an accepted turn ended. Both variants leave a reply in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Replied(String),
    Failed(CompletionError),
}

/// Drives turns for one session: store, completion client, observers.
pub struct ChatSession {
    store: SessionStore,
    client: Arc<dyn CompletionClient>,
    observers: Vec<Box<dyn SessionObserver>>,
    state: TurnState,
}

impl ChatSession {
    pub fn new(store: SessionStore, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            store,
            client,
            observers: Vec::new(),
            state: TurnState::Idle,
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Run one turn. `&mut self` keeps a session to a single turn in flight.
    pub async fn submit(&mut self, user_text: &str) -> Result<TurnOutcome, TurnError> {
        if user_text.trim().is_empty() {
            return Err(TurnError::EmptyInput);
        }
        if self.store.config().api_key().is_empty() {
            return Err(TurnError::MissingApiKey);
        }

        self.store.append_message(Role::User, user_text);
        self.transcript_changed();
        self.set_state(TurnState::AwaitingResponse);

        let result = {
            let history = self.store.history_window();
            let config = self.store.config();
            let request = CompletionRequest {
                api_key: config.api_key().expose(),
                model: config.model(),
                temperature: config.temperature(),
                max_tokens: config.max_tokens(),
                system_prompt: config.system_prompt(),
                history: &history,
                user_text,
            };
            log::debug!("session {} turn request: {:?}", self.store.session_id(), request);
            self.client.complete(request).await
        };

        let outcome = match result {
            Ok(reply) => {
                self.store.append_message(Role::Assistant, reply.clone());
                self.store.record_exchange(user_text, reply.clone());
                TurnOutcome::Replied(reply)
            }
            Err(error) => {
                log::warn!("session {} turn failed: {}", self.store.session_id(), error);
                self.store
                    .append_message(Role::Assistant, format!("{}{}", ERROR_REPLY_PREFIX, error.message()));
                TurnOutcome::Failed(error)
            }
        };

        self.transcript_changed();
        self.set_state(TurnState::Idle);
        Ok(outcome)
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.transcript_changed();
    }

    pub fn update_config(&mut self, update: ConfigUpdate) -> Result<(), ConfigError> {
        self.store.update_config(update)?;
        self.notify(SessionEvent::ConfigChanged);
        Ok(())
    }

    fn set_state(&mut self, state: TurnState) {
        self.state = state;
        self.notify(SessionEvent::TurnStateChanged(state));
    }

    fn transcript_changed(&mut self) {
        let len = self.store.transcript().len();
        self.notify(SessionEvent::TranscriptChanged { len });
    }

    fn notify(&mut self, event: SessionEvent) {
        let store = &self.store;
        for observer in &mut self.observers {
            observer.on_event(&event, store);
        }
    }
}
