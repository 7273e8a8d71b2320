//! Chat Provider Port - Interface for the external completion service.
//!
//! Abstracts the hosted LLM chat API so the session can generate
//! replies without coupling to a specific provider.
//!
//! # Design
//!
//! - Provider-agnostic message format with an explicit role enum
//! - The request carries the prior history and the new turn separately,
//!   matching how chat-style APIs prime a conversation
//! - Error types for the common failure modes (auth, rate limit,
//!   transport), with a retryable classification

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for chat completion interactions.
///
/// Implementations connect to an external completion service and
/// translate between its wire format and our message types.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generate a reply for the new turn given the prior history.
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatError>;

    /// Provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Role of a chat history entry.
///
/// The provider convention has no first-class system role: a
/// conversation is primed with a `user` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// User input (including the priming preamble).
    User,
    /// Model response.
    Model,
}

/// An API-formatted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who produced this entry.
    pub role: ChatRole,
    /// Entry text.
    pub text: String,
}

impl ChatMessage {
    /// Creates a new message.
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    /// Creates a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Creates a model message.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }
}

/// Request for a chat completion.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Conversation history, oldest first, excluding the new turn.
    pub history: Vec<ChatMessage>,
    /// The new user turn to answer.
    pub turn: String,
    /// Language hint for the reply (service code, e.g. "en").
    pub language: String,
}

impl ChatRequest {
    /// Creates a request with an empty history.
    pub fn new(turn: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            history: Vec::new(),
            turn: turn.into(),
            language: language.into(),
        }
    }

    /// Sets the conversation history.
    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.history = history;
        self
    }
}

/// Provider information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g. "gemini", "mock").
    pub name: String,
    /// Model identifier.
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Chat provider errors.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl ChatError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ChatError::RateLimited { .. }
                | ChatError::Unavailable { .. }
                | ChatError::Network(_)
                | ChatError::Timeout { .. }
        )
    }
}
