#![allow(dead_code)]

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

use wideseek_llm_api::{ClientSettings, OpenAiCompatClient};

pub const TEST_API_KEY: &str = "sk-test-api-key-0123456789";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Mock server utilities for testing the completion client
pub struct CompletionMockServer {
    server: MockServer,
}

impl CompletionMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn api_base(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Client pointed at this server with a short timeout
    pub fn client(&self, timeout: Duration) -> OpenAiCompatClient {
        let settings = ClientSettings {
            api_base: self.api_base(),
            timeout,
            verbose: false,
        };
        OpenAiCompatClient::new(&settings).expect("client should build")
    }

    pub fn success_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl_test123",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 20,
                "total_tokens": 30
            }
        })
    }

    /// Mock a successful completion for any authorized request
    pub async fn mock_success(&self, response_content: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::success_body(response_content)))
            .mount(&self.server)
            .await;
    }

    /// Mock a provider error with an OpenAI-style error body
    pub async fn mock_error(&self, status: u16, error_type: &str, error_message: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "message": error_message,
                    "type": error_type,
                    "code": null
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a response that arrives after `delay`
    pub async fn mock_slow(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(Self::success_body("too late"))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 with an arbitrary raw body
    pub async fn mock_raw(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request the server has seen
    pub async fn request_bodies(&self) -> Vec<serde_json::Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).expect("request body should be JSON"))
            .collect()
    }
}
