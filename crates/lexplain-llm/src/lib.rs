//! Lexplain LLM Collaborator Layer
//!
//! Pluggable chat-completion backends behind a single narrow contract.
//!
//! # Architecture
//!
//! This crate provides implementations of the [`ChatCompleter`] trait, the
//! only LLM surface the rest of the workspace depends on: an ordered list of
//! role/content messages in, completion text out. Model identity, sampling
//! temperature, and output caps travel in [`CompletionParams`].
//!
//! # Providers
//!
//! - `MockCompleter`: Deterministic scripted mock for testing
//! - `GroqClient`: Groq's OpenAI-compatible chat completions API
//!
//! # Examples
//!
//! ```
//! use lexplain_llm::{ChatCompleter, ChatMessage, CompletionParams, MockCompleter};
//!
//! # async fn example() {
//! let llm = MockCompleter::new("Hello from LLM!");
//! let messages = vec![ChatMessage::user("test prompt")];
//! let params = CompletionParams::for_model("test-model");
//! let out = llm.complete(&messages, &params).await.unwrap();
//! assert_eq!(out, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod groq;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use groq::GroqClient;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// API key missing from both arguments and environment
    #[error("API key missing: {0}")]
    MissingApiKey(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// One role/content pair in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system", "user", "assistant")
    pub role: String,

    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling parameters for a completion call
#[derive(Debug, Clone)]
pub struct CompletionParams {
    /// Model identifier (e.g. "llama-3.3-70b-versatile")
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Cap on generated tokens, if any
    pub max_tokens: Option<u32>,
}

impl CompletionParams {
    /// Params for a model with default sampling (temperature 0.2, no cap)
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.2,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the generated-token cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Trait for chat-completion backends
///
/// The rest of the workspace depends only on this contract, so tests can
/// substitute a [`MockCompleter`] for the network-backed client.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    /// Send an ordered message list and return the completion text
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<String, LlmError>;
}

/// A scripted reply for the mock completer
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

/// Mock chat completer for deterministic testing
///
/// Returns pre-scripted replies in order without making any network calls,
/// falling back to a fixed default response once the script is exhausted.
///
/// # Examples
///
/// ```
/// use lexplain_llm::{ChatCompleter, ChatMessage, CompletionParams, MockCompleter};
///
/// # async fn example() {
/// let llm = MockCompleter::new("default");
/// llm.push_text("first");
/// llm.push_error("boom");
///
/// let messages = vec![ChatMessage::user("hi")];
/// let params = CompletionParams::for_model("m");
/// assert_eq!(llm.complete(&messages, &params).await.unwrap(), "first");
/// assert!(llm.complete(&messages, &params).await.is_err());
/// assert_eq!(llm.complete(&messages, &params).await.unwrap(), "default");
/// assert_eq!(llm.call_count(), 3);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockCompleter {
    default_response: String,
    script: Arc<Mutex<VecDeque<MockReply>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockCompleter {
    /// Create a new MockCompleter with a fixed response for all calls
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a successful reply
    pub fn push_text(&self, text: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
    }

    /// Queue a failing reply
    pub fn push_error(&self, message: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(MockReply::Error(message.into()));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockCompleter {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl ChatCompleter for MockCompleter {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _params: &CompletionParams,
    ) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Error(message)) => Err(LlmError::Other(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}
