use std::fmt;
use std::ops::RangeInclusive;

use wideseek_logging::redact_api_key;
use wideseek_models::{ModelName, DEFAULT_SYSTEM_PROMPT};

pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=2.0;
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 100..=4000;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Completed exchanges replayed to the provider on each turn
pub const DEFAULT_HISTORY_TURNS: usize = 20;

/// API credential. `Debug` and `Display` never show more than a short prefix.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", redact_api_key(&self.0))
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact_api_key(&self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("temperature {0} is outside the allowed range 0.0 to 2.0")]
    TemperatureOutOfRange(f32),
    #[error("max tokens {0} is outside the allowed range 100 to 4000")]
    MaxTokensOutOfRange(u32),
}

/// Generation settings for one session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    api_key: ApiKey,
    model: ModelName,
    temperature: f32,
    max_tokens: u32,
    system_prompt: Option<String>,
    history_turns: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_key: ApiKey::default(),
            model: ModelName::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: Some(DEFAULT_SYSTEM_PROMPT.to_string()),
            history_turns: DEFAULT_HISTORY_TURNS,
        }
    }
}

impl SessionConfig {
    /// Replace the conversation preamble; `None` sends no system message.
    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.system_prompt = system_prompt.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn with_history_turns(mut self, history_turns: usize) -> Self {
        self.history_turns = history_turns;
        self
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn model(&self) -> ModelName {
        self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }

    pub fn history_turns(&self) -> usize {
        self.history_turns
    }

    /// Merge an update. Every present field is checked before any is applied,
    /// so a rejected update leaves the config untouched.
    pub fn apply(&mut self, update: ConfigUpdate) -> Result<(), ConfigError> {
        if let Some(t) = update.temperature {
            if !TEMPERATURE_RANGE.contains(&t) {
                return Err(ConfigError::TemperatureOutOfRange(t));
            }
        }
        if let Some(n) = update.max_tokens {
            if !MAX_TOKENS_RANGE.contains(&n) {
                return Err(ConfigError::MaxTokensOutOfRange(n));
            }
        }

        if let Some(key) = update.api_key {
            self.api_key = key;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(t) = update.temperature {
            self.temperature = t;
        }
        if let Some(n) = update.max_tokens {
            self.max_tokens = n;
        }
        Ok(())
    }
}

/// Partial edit of the user-editable settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigUpdate {
    pub api_key: Option<ApiKey>,
    pub model: Option<ModelName>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl ConfigUpdate {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(key));
        self
    }

    pub fn model(mut self, model: ModelName) -> Self {
        self.model = Some(model);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.model.is_none() && self.temperature.is_none() && self.max_tokens.is_none()
    }
}
