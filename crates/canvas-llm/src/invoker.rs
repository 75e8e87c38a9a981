//! The injected model capability.

use async_trait::async_trait;
use canvas_core::CanvasError;

use crate::LlmResponse;

/// Anything that can turn a prompt into a single free-form text reply.
///
/// Production code uses [`UnifiedLlmClient`](crate::UnifiedLlmClient); tests
/// plug in scripted implementations so no network access is needed.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Returns the provider model identifier, for logging.
    fn model_name(&self) -> &str;

    /// Sends a system prompt and user input, returning the complete reply.
    async fn complete(
        &self,
        system_prompt: &str,
        user_input: &str,
    ) -> Result<LlmResponse, CanvasError>;
}
