//! Chat session - the API-formatted conversation history.
//!
//! Owns the ordered message sequence sent to the completion service:
//! one priming preamble (role `user`), then exactly two entries (user,
//! model) per completed exchange. The sequence only ever grows by
//! appending; `reset` replaces it wholesale.
//!
//! Failure semantics: every provider failure is converted into a
//! descriptive string returned as if it were the model's reply, and
//! the reply text - real answer, missing-credential notice, or error
//! text - is always the text appended as the model turn. History and
//! the displayed transcript therefore never diverge. The trade-off is
//! that error text becomes part of future model context; preserved
//! deliberately.

use std::sync::Arc;

use crate::ports::{ChatMessage, ChatProvider, ChatRequest};

/// Reply returned when no API credential is configured.
pub const UNCONFIGURED_REPLY: &str = "Chat service credential is not configured. \
     Set HEALTH_COMPASS__AI__GEMINI_API_KEY to enable live responses.";

/// The conversation history plus the provider that answers it.
///
/// `provider` is `None` when no credential is configured; the session
/// then answers with a fixed notice without calling out.
pub struct ChatSession {
    provider: Option<Arc<dyn ChatProvider>>,
    preamble: String,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    /// Creates a session primed with the preamble.
    pub fn new(provider: Option<Arc<dyn ChatProvider>>, preamble: impl Into<String>) -> Self {
        let preamble = preamble.into();
        let history = vec![ChatMessage::user(preamble.clone())];
        Self {
            provider,
            preamble,
            history,
        }
    }

    /// The full API-formatted history, preamble first.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// True if a provider is configured.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Sends one user turn and returns the reply text.
    ///
    /// Appends the user turn, obtains a reply (from the provider, or a
    /// fixed notice when unconfigured, or stringified error text), and
    /// appends that reply as the model turn. The history grows by
    /// exactly two entries on every call.
    pub async fn send(&mut self, user_text: &str, language_hint: &str) -> String {
        self.history.push(ChatMessage::user(user_text));

        let reply = match &self.provider {
            None => {
                tracing::debug!("no chat credential configured, returning fixed notice");
                UNCONFIGURED_REPLY.to_string()
            }
            Some(provider) => {
                // History up to (not including) the turn just pushed.
                let prior = self.history[..self.history.len() - 1].to_vec();
                let request = ChatRequest::new(user_text, language_hint).with_history(prior);

                match provider.complete(request).await {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!(error = %e, "chat completion failed, replying with error text");
                        format!("Error contacting chat service: {e}")
                    }
                }
            }
        };

        self.history.push(ChatMessage::model(reply.clone()));
        reply
    }

    /// Replaces the history with a fresh single-element sequence
    /// containing the preamble.
    pub fn reset(&mut self) {
        self.history = vec![ChatMessage::user(self.preamble.clone())];
    }
}
