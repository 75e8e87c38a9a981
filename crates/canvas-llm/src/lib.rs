//! Model invoker abstraction and LLM provider clients.
//!
//! The canvas pipeline only needs one capability from a model: text in, text
//! out, fallible. That capability is the [`ModelInvoker`] trait. Concrete
//! providers:
//!
//! - [`UnifiedLlmClient`] — Recommended: auto-routes to the correct provider
//! - [`LlmClient`] — OpenAI-compatible client (OpenAI, Gemini, Ollama, ...)
//! - [`AnthropicClient`] — Claude models via the Anthropic API
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use canvas_core::ModelConfig;
//! use canvas_llm::{ModelInvoker, UnifiedLlmClient};
//!
//! // gemini-* models go to Google's OpenAI-compatible endpoint
//! let client = UnifiedLlmClient::new(&model_config);
//! let response = client.complete("You are helpful.", "Hello!").await?;
//! println!("{}", response.content);
//! ```

mod anthropic;
mod client;
mod invoker;
mod unified;

pub use anthropic::AnthropicClient;
pub use client::{LlmClient, LlmMetrics, LlmResponse};
pub use invoker::ModelInvoker;
pub use unified::{ProviderType, UnifiedLlmClient, GEMINI_API_BASE};
