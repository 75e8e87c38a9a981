//! Data transfer objects for HTTP message serialization.

use canvas_core::CanvasResult;
use serde::Serialize;

/// Status reported alongside every successfully generated canvas.
pub const CANVAS_GENERATED: &str = "canvas_generated";

/// Successful canvas generation response.
#[derive(Debug, Serialize)]
pub struct CanvasResponse {
    /// The decoded canvas, passed through as the model produced it.
    pub response: CanvasResult,
    pub status: &'static str,
    /// The startup description exactly as received.
    pub input: String,
}

impl CanvasResponse {
    pub fn generated(response: CanvasResult, input: String) -> Self {
        Self {
            response,
            status: CANVAS_GENERATED,
            input,
        }
    }
}
