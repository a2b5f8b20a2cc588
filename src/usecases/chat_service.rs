//! Chat service. Owns the session transcript and the streaming send flow.
//!
//! Coordinates between the UI (deltas rendered live) and the chat port.
//! A failed stream is replaced by a static apology turn; there is no retry.

use crate::domain::{ChatMessage, Role};
use crate::ports::ChatPort;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Opening assistant message shown when the chat starts. Never sent to the
/// endpoint.
pub const GREETING: &str = "Hello! I'm MediHelp AI. I can help you understand your symptoms, \
suggest remedies, and guide you on when to seek medical care. How are you feeling today?";

/// Substituted for the assistant turn when the stream fails.
pub const APOLOGY: &str = "I'm sorry, I encountered an error. Please try again.";

/// Service for the AI chat session.
///
/// The transcript is seeded with the greeting and lives only for the
/// lifetime of this service; nothing is persisted.
pub struct ChatService {
    chat: Arc<dyn ChatPort>,
    transcript: Mutex<Vec<ChatMessage>>,
}

impl ChatService {
    pub fn new(chat: Arc<dyn ChatPort>) -> Self {
        Self {
            chat,
            transcript: Mutex::new(vec![ChatMessage::assistant(GREETING)]),
        }
    }

    /// Snapshot of the transcript, greeting included.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.clone()
    }

    /// Send one user message and stream the assistant reply.
    ///
    /// `on_delta` receives each reply fragment as it arrives. Returns the
    /// assistant turn appended to the transcript, or None when the stream
    /// completed without producing any content. On error the static apology
    /// is appended and returned instead.
    pub async fn send(
        &self,
        text: &str,
        on_delta: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> Option<ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        // The greeting is display-only; the endpoint sees the turns after it.
        let outbound = {
            let mut transcript = self.transcript.lock().await;
            transcript.push(ChatMessage::user(trimmed));
            transcript[1..].to_vec()
        };

        match self.chat.stream_reply(&outbound, on_delta).await {
            Ok(reply) if !reply.is_empty() => {
                let message = ChatMessage::assistant(reply);
                self.transcript.lock().await.push(message.clone());
                info!(
                    turns = outbound.len() + 1,
                    reply_len = message.content.len(),
                    "assistant reply appended"
                );
                Some(message)
            }
            Ok(_) => {
                warn!("chat stream completed without content");
                None
            }
            Err(e) => {
                warn!(error = %e, "chat stream failed, substituting apology");
                let message = ChatMessage {
                    role: Role::Assistant,
                    content: APOLOGY.to_string(),
                };
                self.transcript.lock().await.push(message.clone());
                Some(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::sync::Mutex as StdMutex;

    /// Records the messages it was called with and replies with a fixed text.
    struct RecordingAdapter {
        seen: StdMutex<Vec<Vec<ChatMessage>>>,
    }

    impl RecordingAdapter {
        fn new() -> Self {
            Self {
                seen: StdMutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl ChatPort for RecordingAdapter {
        async fn stream_reply(
            &self,
            messages: &[ChatMessage],
            on_delta: &mut (dyn for<'a> FnMut(&'a str) + Send),
        ) -> Result<String, DomainError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            on_delta("pong");
            Ok("pong".to_string())
        }
    }

    struct FailingAdapter;

    #[async_trait::async_trait]
    impl ChatPort for FailingAdapter {
        async fn stream_reply(
            &self,
            _messages: &[ChatMessage],
            _on_delta: &mut (dyn for<'a> FnMut(&'a str) + Send),
        ) -> Result<String, DomainError> {
            Err(DomainError::Chat("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn test_transcript_seeded_with_greeting() {
        let service = ChatService::new(Arc::new(RecordingAdapter::new()));
        let transcript = service.transcript().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, Role::Assistant);
        assert_eq!(transcript[0].content, GREETING);
    }

    #[tokio::test]
    async fn test_send_appends_user_and_assistant_turns() {
        let adapter = Arc::new(RecordingAdapter::new());
        let service = ChatService::new(adapter.clone());

        let mut streamed = String::new();
        let reply = service
            .send("ping", &mut |d| streamed.push_str(d))
            .await
            .unwrap();

        assert_eq!(reply.content, "pong");
        assert_eq!(streamed, "pong");

        let transcript = service.transcript().await;
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].role, Role::User);
        assert_eq!(transcript[1].content, "ping");
        assert_eq!(transcript[2].role, Role::Assistant);
    }

    #[tokio::test]
    async fn test_greeting_excluded_from_outbound_request() {
        let adapter = Arc::new(RecordingAdapter::new());
        let service = ChatService::new(adapter.clone());

        service.send("ping", &mut |_| {}).await;

        let seen = adapter.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), 1);
        assert_eq!(seen[0][0].role, Role::User);
    }

    #[tokio::test]
    async fn test_history_accumulates_across_sends() {
        let adapter = Arc::new(RecordingAdapter::new());
        let service = ChatService::new(adapter.clone());

        service.send("first", &mut |_| {}).await;
        service.send("second", &mut |_| {}).await;

        let seen = adapter.seen.lock().unwrap();
        // Second request carries user, assistant, user.
        assert_eq!(seen[1].len(), 3);
        assert_eq!(seen[1][0].content, "first");
        assert_eq!(seen[1][2].content, "second");
    }

    #[tokio::test]
    async fn test_failure_substitutes_apology() {
        let service = ChatService::new(Arc::new(FailingAdapter));

        let reply = service.send("ping", &mut |_| {}).await.unwrap();
        assert_eq!(reply.content, APOLOGY);

        let transcript = service.transcript().await;
        assert_eq!(transcript.last().unwrap().content, APOLOGY);
    }

    #[tokio::test]
    async fn test_blank_input_ignored() {
        let adapter = Arc::new(RecordingAdapter::new());
        let service = ChatService::new(adapter.clone());

        assert!(service.send("   ", &mut |_| {}).await.is_none());
        assert_eq!(service.transcript().await.len(), 1);
        assert!(adapter.seen.lock().unwrap().is_empty());
    }
}
