//! Actor wrapping the chat-completion provider.

pub mod llm;
pub mod messages;
pub mod traits;
