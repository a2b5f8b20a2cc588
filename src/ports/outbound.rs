//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ChatMessage, DomainError};

/// AI chat gateway. Streams a completion for the conversation so far.
#[async_trait::async_trait]
pub trait ChatPort: Send + Sync {
    /// Send the accumulated messages and stream the assistant reply.
    ///
    /// `on_delta` is invoked with each content fragment as it arrives so the
    /// caller can render progressively. The full reply is returned once the
    /// stream completes.
    async fn stream_reply(
        &self,
        messages: &[ChatMessage],
        on_delta: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> Result<String, DomainError>;
}
