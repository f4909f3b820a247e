use serde::{Deserialize, Serialize};

use crate::types::{Message, ModelName};

/// Message as it goes over the wire; unlike `Message` it can carry the
/// `system` role used for the conversation preamble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

impl WireMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role().as_str().to_string(),
            content: message.content().to_string(),
        }
    }
}

/// OpenAI-compatible chat-completions request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: ModelName,
    pub messages: Vec<WireMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}
