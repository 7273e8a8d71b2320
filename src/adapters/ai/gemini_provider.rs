//! Gemini Provider - Implementation of ChatProvider for the Google
//! generative language REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-1.5-flash")
//!     .with_base_url("https://generativelanguage.googleapis.com");
//!
//! let provider = GeminiProvider::new(config)?;
//! ```
//!
//! # Wire format
//!
//! POST `/v1beta/models/{model}:generateContent` with the conversation
//! as `contents` (roles `"user"` / `"model"`, text in `parts`). The
//! reply is read from `candidates[0].content.parts`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ChatError, ChatProvider, ChatRequest, ChatRole, ProviderInfo};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g. "gemini-1.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChatError::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Converts our request to Gemini's format.
    ///
    /// The prior history and the new turn are concatenated: the wire
    /// API takes the whole conversation per call.
    fn to_gemini_request(&self, request: &ChatRequest) -> GeminiRequest {
        let mut contents: Vec<GeminiContent> = request
            .history
            .iter()
            .map(|msg| GeminiContent {
                role: match msg.role {
                    ChatRole::User => "user".to_string(),
                    ChatRole::Model => "model".to_string(),
                },
                parts: vec![GeminiPart {
                    text: msg.text.clone(),
                }],
            })
            .collect();

        contents.push(GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart {
                text: request.turn.clone(),
            }],
        });

        GeminiRequest { contents }
    }

    /// Sends one request attempt.
    async fn send_request(&self, body: &GeminiRequest) -> Result<Response, ChatError> {
        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ChatError::network(format!("connection failed: {e}"))
                } else {
                    ChatError::network(e.to_string())
                }
            })
    }

    /// Maps a non-success status to a ChatError.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ChatError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(ChatError::AuthenticationFailed),
            429 => Err(ChatError::rate_limited(60)),
            400 => Err(ChatError::InvalidRequest(error_body)),
            500..=599 => Err(ChatError::unavailable(format!(
                "server error {status}: {error_body}"
            ))),
            _ => Err(ChatError::network(format!(
                "unexpected status {status}: {error_body}"
            ))),
        }
    }

    /// Extracts the reply text from a parsed response.
    fn extract_text(response: GeminiResponse) -> Result<String, ChatError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::parse("response contained no candidates"))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(ChatError::parse("candidate contained no text parts"));
        }
        Ok(text)
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatError> {
        let body = self.to_gemini_request(&request);
        tracing::debug!(
            model = %self.config.model,
            history_len = request.history.len(),
            language = %request.language,
            "sending chat completion request"
        );

        let mut attempt = 0;
        loop {
            let err = match self.send_request(&body).await {
                Ok(response) => match self.handle_response_status(response).await {
                    Ok(response) => {
                        let parsed: GeminiResponse = response
                            .json()
                            .await
                            .map_err(|e| ChatError::parse(e.to_string()))?;
                        return Self::extract_text(parsed);
                    }
                    Err(e) => e,
                },
                Err(e) => e,
            };

            if err.is_retryable() && attempt < self.config.max_retries {
                attempt += 1;
                tracing::warn!(error = %err, attempt, "retrying chat completion");
                sleep(Duration::from_millis(500 * u64::from(attempt))).await;
            } else {
                tracing::error!(error = %err, "chat completion failed");
                return Err(err);
            }
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}
