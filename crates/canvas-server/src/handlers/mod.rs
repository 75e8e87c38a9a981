//! HTTP route handlers for the canvas server.

pub mod canvas;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
