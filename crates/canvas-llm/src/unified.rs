//! Unified LLM client that routes to the appropriate provider based on model name.

use async_trait::async_trait;
use canvas_core::{CanvasError, ModelConfig};

use crate::anthropic::AnthropicClient;
use crate::client::LlmClient;
use crate::{LlmResponse, ModelInvoker};

/// Google's OpenAI-compatible endpoint for Gemini models.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Provider type determined from model name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    OpenAI,
    Gemini,
    Anthropic,
}

impl ProviderType {
    /// Detects the provider from a model identifier.
    pub fn detect(model: &str) -> Self {
        if model.starts_with("claude-") {
            ProviderType::Anthropic
        } else if model.starts_with("gemini-") {
            ProviderType::Gemini
        } else {
            ProviderType::OpenAI
        }
    }

    /// Environment variables holding this provider's credential, in lookup order.
    pub fn api_key_vars(&self) -> &'static [&'static str] {
        match self {
            ProviderType::OpenAI => &["OPENAI_API_KEY"],
            ProviderType::Gemini => &["GOOGLE_API_KEY", "GEMINI_API_KEY"],
            ProviderType::Anthropic => &["ANTHROPIC_API_KEY"],
        }
    }
}

enum Backend {
    OpenAI(LlmClient),
    Anthropic(AnthropicClient),
}

/// Client that routes requests to OpenAI, Gemini or Anthropic based on model name.
///
/// Built once at startup; the underlying HTTP clients are reused across requests.
pub struct UnifiedLlmClient {
    model: String,
    provider: ProviderType,
    backend: Backend,
}

impl UnifiedLlmClient {
    /// Creates a new unified client, detecting provider from model name.
    pub fn new(config: &ModelConfig) -> Self {
        let provider = ProviderType::detect(&config.model);
        let api_key = config.api_key.as_deref();

        let backend = match provider {
            ProviderType::OpenAI => Backend::OpenAI(LlmClient::new(
                &config.model,
                config.api_base.as_deref(),
                api_key,
            )),
            ProviderType::Gemini => Backend::OpenAI(LlmClient::new(
                &config.model,
                Some(config.api_base.as_deref().unwrap_or(GEMINI_API_BASE)),
                api_key,
            )),
            ProviderType::Anthropic => {
                let client = AnthropicClient::new(&config.model, api_key);
                match config.api_base.as_deref() {
                    Some(base) => Backend::Anthropic(client.with_base_url(base)),
                    None => Backend::Anthropic(client),
                }
            }
        };

        Self {
            model: config.model.clone(),
            provider,
            backend,
        }
    }

    /// Returns the provider this client routes to.
    pub fn provider(&self) -> ProviderType {
        self.provider
    }

    /// Sends a non-streaming chat request and returns the complete response.
    pub async fn chat(&self, system_prompt: &str, user_input: &str) -> Result<LlmResponse, CanvasError> {
        match &self.backend {
            Backend::OpenAI(client) => client.chat(system_prompt, user_input).await,
            Backend::Anthropic(client) => client.chat(system_prompt, user_input).await,
        }
    }
}

#[async_trait]
impl ModelInvoker for UnifiedLlmClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_input: &str,
    ) -> Result<LlmResponse, CanvasError> {
        self.chat(system_prompt, user_input).await
    }
}
