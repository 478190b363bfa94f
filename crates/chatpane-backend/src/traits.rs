use crate::error::Result;
use crate::types::ChatMessage;
use async_trait::async_trait;

/// Trait for backends that answer a conversation with a single reply
///
/// One call is one round trip: no retries, no streaming. Callers own the
/// "awaiting reply" state and decide how failures reach the user.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Send the full history and return the reply text
    async fn send(&self, history: Vec<ChatMessage>) -> Result<String>;
}
