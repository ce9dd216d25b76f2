//! Groq Provider Implementation
//!
//! Chat completions against Groq's OpenAI-compatible HTTP API.
//!
//! # Features
//!
//! - Async HTTP communication over a reused `reqwest` client
//! - Configurable endpoint and request timeout
//! - API key from the constructor or the `GROQ_API_KEY` environment variable
//!
//! # Examples
//!
//! ```no_run
//! use lexplain_llm::GroqClient;
//!
//! // Create a Groq client from the environment
//! let client = GroqClient::from_env().unwrap();
//! ```
//!
//! Retries are deliberately not implemented here: callers own the retry
//! budget, so a failed request surfaces after a single attempt.

use crate::{ChatCompleter, ChatMessage, CompletionParams, LlmError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Groq API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";

/// Default timeout for LLM requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Groq chat-completions provider
///
/// Holds one `reqwest::Client` so the connection is reused across calls.
pub struct GroqClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl GroqClient {
    /// Create a new Groq client with an explicit API key
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create a new Groq client from the `GROQ_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns `LlmError::MissingApiKey` if the variable is unset or empty.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                LlmError::MissingApiKey(format!(
                    "{} not set; export it or pass --api-key",
                    API_KEY_ENV
                ))
            })?;
        Ok(Self::new(api_key))
    }

    /// Override the API endpoint (for OpenAI-compatible gateways)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Send one chat-completion request and return the completion text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The network request fails or times out
    /// - The API rejects the model or rate-limits the key
    /// - The response body lacks a completion
    async fn chat(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request_body = ChatCompletionRequest {
            model: &params.model,
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(params.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))
    }
}

#[async_trait]
impl ChatCompleter for GroqClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<String, LlmError> {
        self.chat(messages, params).await
    }
}
