use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Greeting that opens every session (and every cleared session)
pub const GREETING: &str = "Hello! I'm Xiaomei, your AI assistant. Happy to be of service!";

/// Conversation preamble sent ahead of the history as a system message
pub const DEFAULT_SYSTEM_PROMPT: &str = "The following is a friendly conversation between a human and an AI. \
The AI is talkative and provides lots of specific details from its context. \
If the AI does not know the answer to a question, it truthfully says it does not know.";

// ============================================================================
// Model Names
// ============================================================================

/// Models offered in the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ModelName {
    #[default]
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4")]
    Gpt4,
}

impl ModelName {
    /// All selectable models, in dropdown order
    pub const ALL: [ModelName; 3] = [ModelName::Gpt4oMini, ModelName::Gpt35Turbo, ModelName::Gpt4];

    /// Provider-native model identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Gpt4oMini => "gpt-4o-mini",
            ModelName::Gpt35Turbo => "gpt-3.5-turbo",
            ModelName::Gpt4 => "gpt-4",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelName::Gpt4oMini => "GPT-4o mini",
            ModelName::Gpt35Turbo => "GPT-3.5 Turbo",
            ModelName::Gpt4 => "GPT-4",
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model '{0}' (expected one of: gpt-4o-mini, gpt-3.5-turbo, gpt-4)")]
pub struct ModelParseError(pub String);

impl FromStr for ModelName {
    type Err = ModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gpt-4o-mini" | "gpt4o-mini" | "4o-mini" => Ok(ModelName::Gpt4oMini),
            "gpt-3.5-turbo" | "gpt-35-turbo" | "gpt3.5" | "3.5" => Ok(ModelName::Gpt35Turbo),
            "gpt-4" | "gpt4" | "4" => Ok(ModelName::Gpt4),
            _ => Err(ModelParseError(s.to_string())),
        }
    }
}

// ============================================================================
// Message Types
// ============================================================================

/// Author of a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One transcript entry. Immutable once created: fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn greeting() -> Self {
        Self::assistant(GREETING)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
