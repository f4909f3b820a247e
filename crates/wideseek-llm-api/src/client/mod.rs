use async_trait::async_trait;
use std::fmt;

use wideseek_logging::redact_api_key;
use wideseek_models::{ApiErrorResponse, ChatRequest, Message, ModelName, WireMessage};

pub mod openai;

/// Everything one completion call needs, borrowed from the session.
#[derive(Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub api_key: &'a str,
    pub model: ModelName,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_prompt: Option<&'a str>,
    /// Prior turns, oldest first
    pub history: &'a [Message],
    /// The new user turn
    pub user_text: &'a str,
}

impl fmt::Debug for CompletionRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionRequest")
            .field("api_key", &redact_api_key(self.api_key))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("system_prompt", &self.system_prompt)
            .field("history", &self.history.len())
            .field("user_text", &self.user_text)
            .finish()
    }
}

impl CompletionRequest<'_> {
    /// Map onto the provider's request body: system preamble, history, then the new turn.
    pub fn to_chat_request(&self) -> ChatRequest {
        let mut messages = Vec::with_capacity(self.history.len() + 2);
        if let Some(system) = self.system_prompt {
            messages.push(WireMessage::system(system));
        }
        messages.extend(self.history.iter().map(WireMessage::from));
        messages.push(WireMessage::from(&Message::user(self.user_text)));

        ChatRequest {
            model: self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// Every failure of a completion call, whatever its cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("{0}")]
    CompletionFailed(String),
}

impl CompletionError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::CompletionFailed(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::CompletionFailed(message) => message,
        }
    }

    /// Build from a non-success HTTP status, preferring the provider's own message.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .map(|e| e.error.message)
            .filter(|m| !m.trim().is_empty())
            .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

        match status.as_u16() {
            401 | 403 => Self::failed(format!("authentication failed: {}", detail)),
            429 => Self::failed(format!("rate limited: {}", detail)),
            code => Self::failed(format!("provider error (HTTP {}): {}", code, detail)),
        }
    }

    /// Build from a transport-level failure; a timeout is just another failure.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::failed("request timed out")
        } else if err.is_connect() {
            Self::failed(format!("could not connect to the completion endpoint: {}", err))
        } else {
            Self::failed(format!("request failed: {}", err))
        }
    }
}

/// One request, one response: the seam between the chat session and the provider.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Return the assistant reply verbatim, or the reason there is none.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, CompletionError>;
}
