//! End-to-end canvas generation over an injected model.

use std::borrow::Cow;
use std::sync::Arc;

use canvas_core::{CanvasError, CanvasResult};
use canvas_llm::ModelInvoker;
use tracing::{debug, error, info, warn};

use crate::{build_canvas_prompt, decode, missing_sections, sanitize, CANVAS_SYSTEM_PROMPT};

const LOG_PREVIEW_CHARS: usize = 50;

/// Generates canvases by prompting a model and decoding its reply.
///
/// Holds no per-request state; one instance is shared by all requests.
#[derive(Clone)]
pub struct CanvasGenerator {
    invoker: Arc<dyn ModelInvoker>,
}

impl CanvasGenerator {
    /// Creates a generator backed by the given model.
    pub fn new(invoker: Arc<dyn ModelInvoker>) -> Self {
        Self { invoker }
    }

    /// Generates a canvas for `startup_description`.
    ///
    /// Either the whole reply decodes into a canvas or an error is returned;
    /// nothing is retried.
    pub async fn generate(&self, startup_description: &str) -> Result<CanvasResult, CanvasError> {
        info!(
            "Canvas request (model: {}): {}",
            self.invoker.model_name(),
            preview(startup_description, LOG_PREVIEW_CHARS)
        );

        let prompt = build_canvas_prompt(startup_description);

        let reply = self
            .invoker
            .complete(CANVAS_SYSTEM_PROMPT, &prompt)
            .await
            .inspect_err(|e| error!("Model error: {}", e))?;
        let raw = reply.content;

        let cleaned = sanitize(&raw);
        debug!("Sanitized reply: {}", cleaned);

        let canvas = decode(&raw, &cleaned).inspect_err(|e| warn!("{}", e))?;

        let missing = missing_sections(&canvas);
        if !missing.is_empty() {
            warn!("Canvas is missing sections: {}", missing.join(", "));
        }

        Ok(canvas)
    }
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with `...`.
fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => Cow::Owned(format!("{}...", &text[..end])),
        None => Cow::Borrowed(text),
    }
}
