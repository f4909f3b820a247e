//! # wideseek-llm-api
//!
//! Client side of the chat-completion exchange: one request per turn against
//! an OpenAI-compatible endpoint, one reply (or one error) back.
//!
//! ## Features
//!
//! - **Single seam**: the `CompletionClient` trait, so the chat session can be
//!   driven by a mock in tests
//! - **Uniform errors**: network, auth, and provider failures all surface as
//!   `CompletionError::CompletionFailed`
//! - **Redacted debugging**: verbose mode dumps requests without the credential
//!
//! ## Example
//!
//! ```rust,no_run
//! use wideseek_llm_api::{ClientSettings, CompletionClient, CompletionRequest, OpenAiCompatClient};
//! use wideseek_models::ModelName;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OpenAiCompatClient::new(&ClientSettings::default())?;
//!
//!     let reply = client.complete(CompletionRequest {
//!         api_key: "sk-...",
//!         model: ModelName::Gpt4oMini,
//!         temperature: 0.7,
//!         max_tokens: 1000,
//!         system_prompt: None,
//!         history: &[],
//!         user_text: "Hello!",
//!     }).await?;
//!     println!("Response: {}", reply);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;


// Re-export commonly used types
pub use client::{
    CompletionClient,
    CompletionError,
    CompletionRequest,
    openai::OpenAiCompatClient,
};

pub use config::{
    ClientSettings,
    DEFAULT_API_BASE,
    DEFAULT_TIMEOUT_SECS,
    normalize_api_base,
    chat_completions_url,
};
