//! Mock chat provider for testing.
//!
//! Configurable to return scripted replies or inject errors, with call
//! tracking for verification, so tests run without a real API.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{ChatError, ChatProvider, ChatRequest, ProviderInfo};

/// A scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text.
    Text(String),
    /// Fail with a rate limit error.
    RateLimited,
    /// Fail with a network error.
    NetworkDown,
    /// Fail with an authentication error.
    AuthFailed,
}

/// Mock chat provider.
///
/// Replies are consumed in order; once the queue is empty every call
/// returns a fixed default reply.
#[derive(Debug, Clone, Default)]
pub struct MockChatProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockChatProvider {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a text reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
        self
    }

    /// Queues an error reply.
    pub fn with_failure(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Requests seen so far, in order.
    pub fn calls(&self) -> Vec<ChatRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of completed calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatError> {
        self.calls.lock().unwrap().push(request);

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            None => Ok("I'm a mock assistant.".to_string()),
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::RateLimited) => Err(ChatError::rate_limited(30)),
            Some(MockReply::NetworkDown) => Err(ChatError::network("connection refused")),
            Some(MockReply::AuthFailed) => Err(ChatError::AuthenticationFailed),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model-1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_replies_are_consumed_in_order() {
        let provider = MockChatProvider::new()
            .with_reply("first")
            .with_reply("second");

        let a = provider.complete(ChatRequest::new("q1", "en")).await.unwrap();
        let b = provider.complete(ChatRequest::new("q2", "en")).await.unwrap();
        let c = provider.complete(ChatRequest::new("q3", "en")).await.unwrap();

        assert_eq!(a, "first");
        assert_eq!(b, "second");
        assert_eq!(c, "I'm a mock assistant.");
    }

    #[tokio::test]
    async fn errors_are_injected() {
        let provider = MockChatProvider::new().with_failure(MockReply::NetworkDown);

        let result = provider.complete(ChatRequest::new("q", "en")).await;
        assert!(matches!(result, Err(ChatError::Network(_))));
    }

    #[tokio::test]
    async fn calls_are_tracked() {
        let provider = MockChatProvider::new().with_reply("ok");
        provider
            .complete(ChatRequest::new("hello", "ur"))
            .await
            .unwrap();

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].turn, "hello");
        assert_eq!(calls[0].language, "ur");
    }
}
