//! Core domain types and error definitions for the canvas generator.
//!
//! This crate provides the types shared across the canvas workspace:
//!
//! - [`CanvasError`] — Error type for model calls and reply decoding
//! - [`CanvasRequest`] — Incoming request carrying the startup description
//! - [`CanvasResult`] — Decoded canvas object returned to callers
//! - [`ModelConfig`] — LLM model configuration
//! - [`CANVAS_SECTIONS`] — The ten sections a canvas is expected to contain
//!
//! # Example
//!
//! ```rust
//! use canvas_core::{CanvasRequest, ModelConfig};
//!
//! let req: CanvasRequest = serde_json::from_str("{}").unwrap();
//! assert_eq!(req.startup_description, "");
//!
//! let model = ModelConfig {
//!     id: "gemini".to_string(),
//!     name: "Gemini 1.5 Flash".to_string(),
//!     model: "gemini-1.5-flash".to_string(),
//!     api_base: None,
//!     api_key: None,
//! };
//! assert!(model.api_key.is_none());
//! ```

use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can occur while generating a canvas.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// LLM API request failed.
    #[error("LLM request failed: {0}")]
    LlmError(String),

    /// The model reply could not be decoded as a JSON object.
    ///
    /// `raw` is the reply exactly as the model returned it, before sanitization.
    #[error("Failed to parse agent response: {reason}")]
    ParseError { raw: String, reason: String },

    /// Startup configuration was invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CanvasError {
    /// Creates a parse error that keeps the unsanitized model reply.
    pub fn parse(raw: impl Into<String>, reason: impl ToString) -> Self {
        Self::ParseError {
            raw: raw.into(),
            reason: reason.to_string(),
        }
    }
}

/// The ten sections of a Business Model Canvas, in prompt order.
pub const CANVAS_SECTIONS: [&str; 10] = [
    "Problem",
    "Solution",
    "Unique Value Propositions",
    "Key Metrics",
    "Unfair Advantage",
    "Distribution Channels",
    "Customer Agents",
    "Cost Structure",
    "Revenue Streams",
    "Technical Overview",
];

/// A decoded canvas: whatever JSON object the model produced.
///
/// Keys are expected to match [`CANVAS_SECTIONS`] but are not enforced.
pub type CanvasResult = serde_json::Map<String, serde_json::Value>;

/// Request body for canvas generation.
///
/// Only a JSON object is accepted; arrays, scalars and `null` are rejected.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CanvasRequest {
    /// Free-form description of the startup idea. Missing or `null` becomes empty.
    pub startup_description: String,
}

impl<'de> Deserialize<'de> for CanvasRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;

        let startup_description = match fields.remove("startup_description") {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(text)) => text,
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "startup_description must be a string, got {}",
                    other
                )))
            }
        };

        Ok(Self { startup_description })
    }
}

/// Configuration for an LLM model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Unique identifier for this model configuration.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// The provider model identifier (e.g., "gemini-1.5-flash", "gpt-4o").
    pub model: String,
    /// Optional API base URL for self-hosted or alternative endpoints.
    pub api_base: Option<String>,
    /// Provider credential. Never serialized.
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
}
