use std::time::Duration;

/// Default OpenAI-compatible gateway
pub const DEFAULT_API_BASE: &str = "https://twapi.openai-hk.com/v1";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const COMPLETIONS_PATH: &str = "/chat/completions";

/// Transport settings for the completion client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    /// Base URL such as `https://api.openai.com/v1`
    pub api_base: String,
    pub timeout: Duration,
    /// Dump requests and responses to the console
    pub verbose: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verbose: false,
        }
    }
}

/// Normalize an API base URL: trims whitespace and trailing slashes, and drops
/// a trailing `/chat/completions` so a full endpoint URL is accepted too.
pub fn normalize_api_base(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    trimmed
        .strip_suffix(COMPLETIONS_PATH)
        .unwrap_or(trimmed)
        .trim_end_matches('/')
        .to_string()
}

/// Full chat-completions endpoint for a base URL
pub fn chat_completions_url(api_base: &str) -> String {
    format!("{}{}", normalize_api_base(api_base), COMPLETIONS_PATH)
}
