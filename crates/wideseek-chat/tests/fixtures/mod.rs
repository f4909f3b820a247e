#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use wideseek_chat::{ChatSession, ConfigUpdate, SessionEvent, SessionObserver, SessionStore};
use wideseek_llm_api::{CompletionClient, CompletionError, CompletionRequest};
use wideseek_models::{Message, ModelName};

pub const TEST_API_KEY: &str = "sk-test-api-key-0123456789";

/// What the client was asked for on one call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub api_key: String,
    pub model: ModelName,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_prompt: Option<String>,
    pub history: Vec<Message>,
    pub user_text: String,
}

/// Completion client that replays scripted results and records every call
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, CompletionError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<String, CompletionError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: request.api_key.to_string(),
            model: request.model,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            system_prompt: request.system_prompt.map(str::to_string),
            history: request.history.to_vec(),
            user_text: request.user_text.to_string(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::failed("no scripted reply left")))
    }
}

/// Observer that keeps every event it sees
#[derive(Clone, Default)]
pub struct RecordingObserver {
    pub events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SessionObserver for RecordingObserver {
    fn on_event(&mut self, event: &SessionEvent, _store: &SessionStore) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Session with a key set and the given scripted client
pub fn keyed_session(client: Arc<ScriptedClient>) -> ChatSession {
    let mut session = ChatSession::new(SessionStore::initialize(), client);
    session
        .update_config(ConfigUpdate::default().api_key(TEST_API_KEY))
        .expect("key update is valid");
    session
}

pub fn pairs(messages: &[Message]) -> Vec<(&'static str, String)> {
    messages
        .iter()
        .map(|m| (m.role().as_str(), m.content().to_string()))
        .collect()
}
