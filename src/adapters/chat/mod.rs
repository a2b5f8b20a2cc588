//! Chat adapters: OpenAI-compatible streaming client and a mock for
//! running without an API key.

pub mod mock_adapter;
pub mod openai_adapter;
pub mod sse;

pub use mock_adapter::MockChatAdapter;
pub use openai_adapter::OpenAiChatAdapter;
