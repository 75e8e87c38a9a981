//! Anthropic Claude API client.

use std::time::Instant;

use canvas_core::CanvasError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{LlmMetrics, LlmResponse};

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

#[derive(Serialize)]
struct AnthropicMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<AnthropicMessage>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: Option<u32>,
    output_tokens: Option<u32>,
}

/// A content block in the response. Only text blocks carry reply text.
#[derive(Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Option<Usage>,
}

/// Client for Anthropic's Claude API.
pub struct AnthropicClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// Without an explicit `api_key`, `ANTHROPIC_API_KEY` is read from the environment.
    pub fn new(model: &str, api_key: Option<&str>) -> Self {
        let api_key = api_key
            .map(String::from)
            .unwrap_or_else(|| std::env::var("ANTHROPIC_API_KEY").unwrap_or_default());
        info!("AnthropicClient: model={}, api_key_len={}", model, api_key.len());

        Self {
            client: Client::new(),
            base_url: ANTHROPIC_API_BASE.to_string(),
            model: model.to_string(),
            api_key,
        }
    }

    /// Points the client at a different API host.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sends a chat request and returns the complete response.
    pub async fn chat(&self, system_prompt: &str, user_input: &str) -> Result<LlmResponse, CanvasError> {
        let start = Instant::now();

        let request = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            system: system_prompt.to_string(),
            messages: vec![AnthropicMessage {
                role: "user",
                content: user_input.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CanvasError::LlmError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CanvasError::LlmError(format!(
                "Anthropic API error {}: {}",
                status, body
            )));
        }

        let resp: MessagesResponse = response
            .json()
            .await
            .map_err(|e| CanvasError::LlmError(e.to_string()))?;

        let content = resp
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("");

        let (input_tokens, output_tokens) = resp
            .usage
            .map(|u| (u.input_tokens.unwrap_or(0), u.output_tokens.unwrap_or(0)))
            .unwrap_or((0, 0));
        let elapsed_ms = start.elapsed().as_millis() as u64;

        info!(
            "LLM: {}ms, tokens: {}/{} (in/out)",
            elapsed_ms, input_tokens, output_tokens
        );

        Ok(LlmResponse {
            content,
            metrics: LlmMetrics { input_tokens, output_tokens, elapsed_ms },
        })
    }
}
