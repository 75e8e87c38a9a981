//! Process configuration, read once from the environment at startup.

use canvas_core::{CanvasError, ModelConfig};
use canvas_llm::ProviderType;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 10000;
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Immutable server configuration shared with the router at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model: ModelConfig,
}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, CanvasError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Unset variables fall back to defaults. A `PORT` that is set but not a
    /// valid port number is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CanvasError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| CanvasError::Config(format!("PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let model_id = lookup("CANVAS_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = lookup("CANVAS_API_BASE").filter(|v| !v.is_empty());

        let api_key = ProviderType::detect(&model_id)
            .api_key_vars()
            .iter()
            .find_map(|var| lookup(var).filter(|v| !v.is_empty()));

        Ok(Self {
            host,
            port,
            model: ModelConfig {
                id: "canvas".to_string(),
                name: "Canvas Generator".to_string(),
                model: model_id,
                api_base,
                api_key,
            },
        })
    }

    /// Returns the socket address to bind, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
