//! Application error types and Axum response conversion.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use canvas_core::CanvasError;
use serde::Serialize;

/// Message returned when the model reply is not a JSON object.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse agent response as JSON.";

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    /// The model replied, but not with a decodable canvas.
    Format { raw: String },
    /// Any other failure: provider errors, unreadable request bodies.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<String>,
}

impl From<CanvasError> for AppError {
    fn from(err: CanvasError) -> Self {
        match err {
            CanvasError::ParseError { raw, .. } => AppError::Format { raw },
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Internal(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::Format { raw } => ErrorResponse {
                error: PARSE_FAILURE_MESSAGE.to_string(),
                raw: Some(raw),
            },
            AppError::Internal(msg) => ErrorResponse { error: msg, raw: None },
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
