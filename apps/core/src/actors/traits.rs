use crate::actors::messages::{AppError, CompletionRequest};
use async_trait::async_trait;

/// Defines the public interface for an LLM (Large Language Model) actor.
///
/// This trait abstracts the completion provider so the chat service can run
/// against a remote API in production and a scripted mock in tests.
#[async_trait]
pub trait LlmActor: Send + Sync + 'static {
    /// Returns the text of the first completion choice.
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}
