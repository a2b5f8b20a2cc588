//! Mock chat adapter for running without API calls.
//!
//! Streams a hardcoded reply word by word for development and testing.

use crate::domain::{ChatMessage, DomainError};
use crate::ports::ChatPort;
use std::time::Duration;
use tracing::info;

const CANNED_REPLY: &str = "[MOCK] Thanks for telling me how you feel. In a real setup I \
would look at your message and suggest remedies or when to see a doctor. Set \
MEDIHELP_CHAT_API_KEY to talk to a live model.";

/// Mock chat adapter.
///
/// Returns a predetermined reply without making API calls.
/// Simulates streaming latency with a configurable per-word delay.
pub struct MockChatAdapter {
    /// Simulated delay between streamed words, in milliseconds.
    delay_ms: u64,
}

impl MockChatAdapter {
    /// Create a new mock adapter with default delay (40ms per word).
    pub fn new() -> Self {
        Self { delay_ms: 40 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockChatAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChatPort for MockChatAdapter {
    async fn stream_reply(
        &self,
        messages: &[ChatMessage],
        on_delta: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> Result<String, DomainError> {
        info!(turns = messages.len(), "[MOCK] Simulating chat reply");

        let mut reply = String::new();
        for word in CANNED_REPLY.split_inclusive(' ') {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            reply.push_str(word);
            on_delta(word);
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_adapter_streams_full_reply() {
        let adapter = MockChatAdapter::with_delay(0);
        let messages = vec![ChatMessage::user("I have a headache")];

        let mut streamed = String::new();
        let reply = adapter
            .stream_reply(&messages, &mut |delta| streamed.push_str(delta))
            .await
            .unwrap();

        assert_eq!(reply, CANNED_REPLY);
        assert_eq!(streamed, reply);
    }
}
