use async_trait::async_trait;
use std::time::Duration;

use wideseek_logging::{log_request, log_response};
use wideseek_models::ChatResponse;

use crate::client::{CompletionClient, CompletionError, CompletionRequest};
use crate::config::{chat_completions_url, ClientSettings};

/// OpenAI-compatible chat-completions client
pub struct OpenAiCompatClient {
    url: String,
    timeout: Duration,
    verbose: bool,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("wideseek/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            url: chat_completions_url(&settings.api_base),
            timeout: settings.timeout,
            verbose: settings.verbose,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, CompletionError> {
        // Callers check this first; an empty key must never leave the process.
        if request.api_key.trim().is_empty() {
            return Err(CompletionError::failed("missing API key"));
        }

        let chat_request = request.to_chat_request();
        log_request(&self.url, &chat_request, request.api_key, self.verbose);

        let response = self.client
            .post(&self.url)
            .bearer_auth(request.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                log::warn!("completion request failed after up to {:?}: {}", self.timeout, e);
                CompletionError::from_transport(&e)
            })?;

        let status = response.status();
        let headers = response.headers().clone();
        let response_text = response
            .text()
            .await
            .map_err(|e| CompletionError::from_transport(&e))?;
        log_response(&status, &headers, &response_text, self.verbose);

        if !status.is_success() {
            log::warn!("completion endpoint returned HTTP {}", status.as_u16());
            return Err(CompletionError::from_status(status, &response_text));
        }

        let chat_response: ChatResponse = serde_json::from_str(&response_text)
            .map_err(|e| CompletionError::failed(format!("invalid response from provider: {}", e)))?;

        if let Some(usage) = &chat_response.usage {
            log::info!(
                "completion used {} tokens ({} prompt, {} completion)",
                usage.total_tokens,
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        chat_response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| CompletionError::failed("provider returned no choices"))
    }
}
