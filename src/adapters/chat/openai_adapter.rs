//! OpenAI-compatible adapter for the AI chat assistant.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `ChatPort` with a streamed completions request.

use crate::adapters::chat::sse::StreamDecoder;
use crate::domain::{ChatMessage, DomainError};
use crate::ports::ChatPort;
use futures_util::StreamExt;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// OpenAI-compatible chat adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiChatAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatAdapter {
    /// Create a new chat adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    /// * `connect_timeout` - TCP/TLS connect timeout; the body itself streams
    ///   for as long as the reply takes
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        connect_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client init failed: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    /// Assistant persona. The remote endpoint sees this as the system turn.
    fn system_prompt() -> &'static str {
        "You are MediHelp AI, a friendly and careful health assistant. Help users \
         understand their symptoms, suggest common over-the-counter remedies and home \
         care, and guide them on when to seek professional medical care. Keep answers \
         short and practical. Always remind users that you are not a substitute for \
         professional medical advice, and tell them to call emergency services for \
         chest pain, difficulty breathing, severe confusion, or other emergency signs."
    }
}

/// Chat completions request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<WireMessage>,
    stream: bool,
}

#[derive(Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[async_trait::async_trait]
impl ChatPort for OpenAiChatAdapter {
    async fn stream_reply(
        &self,
        messages: &[ChatMessage],
        on_delta: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> Result<String, DomainError> {
        info!(
            model = %self.model,
            turns = messages.len(),
            "sending conversation to chat endpoint"
        );

        let mut wire = Vec::with_capacity(messages.len() + 1);
        wire.push(WireMessage {
            role: "system".to_string(),
            content: Self::system_prompt().to_string(),
        });
        wire.extend(messages.iter().map(|m| WireMessage {
            role: m.role.as_str().to_string(),
            content: m.content.clone(),
        }));

        let request = ChatRequest {
            model: self.model.clone(),
            messages: wire,
            stream: true,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Chat(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "chat endpoint returned error");
            return Err(DomainError::Chat(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let mut stream = response.bytes_stream();
        let mut decoder = StreamDecoder::new();
        let mut reply = String::new();

        while let Some(chunk) = stream.next().await {
            let bytes =
                chunk.map_err(|e| DomainError::Stream(format!("stream read failed: {}", e)))?;
            for delta in decoder.feed(&bytes) {
                reply.push_str(&delta);
                on_delta(&delta);
            }
            if decoder.is_done() {
                break;
            }
        }

        debug!(reply_len = reply.len(), "chat stream complete");

        Ok(reply)
    }
}
