//! Conversation management for wideseek
//!
//! This crate owns one chat session: the transcript and its replayable
//! memory, the generation settings, and the turn driver that moves a user
//! message through the completion client and back into the transcript.

pub mod chat;

// Re-export commonly used types
pub use chat::config::{
    ApiKey, ConfigError, ConfigUpdate, SessionConfig,
    TEMPERATURE_RANGE, MAX_TOKENS_RANGE,
    DEFAULT_TEMPERATURE, DEFAULT_MAX_TOKENS, DEFAULT_HISTORY_TURNS,
};
pub use chat::history::{Exchange, history_window};
pub use chat::session::{
    ChatSession, SessionEvent, SessionObserver,
    TurnError, TurnOutcome, TurnState, ERROR_REPLY_PREFIX,
};
pub use chat::state::SessionStore;
