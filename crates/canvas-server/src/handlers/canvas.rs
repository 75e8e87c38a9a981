//! Canvas generation handler.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use canvas_core::CanvasRequest;

use crate::dto::CanvasResponse;
use crate::error::AppError;
use crate::ServerState;

/// Generates a Business Model Canvas for the posted startup description.
///
/// Body rejections are reported like any other failure rather than with
/// axum's plain-text default, so every response body is JSON.
pub async fn generate(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<CanvasRequest>, JsonRejection>,
) -> Result<Json<CanvasResponse>, AppError> {
    let Json(req) = payload?;
    let canvas = state.generator.generate(&req.startup_description).await?;
    Ok(Json(CanvasResponse::generated(canvas, req.startup_description)))
}
