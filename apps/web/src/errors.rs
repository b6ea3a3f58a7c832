use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::DocumentError;
use crate::llm_client::LlmError;

/// Shown when the form is submitted without both fields.
pub const MISSING_INPUT_WARNING: &str =
    "Please upload a PDF resume and paste the Job Description.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Non-fatal: a required field was empty. No remote call was made.
    #[error("{}", MISSING_INPUT_WARNING)]
    MissingInput,

    #[error("Invalid form submission: {0}")]
    Form(#[from] MultipartError),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingInput => StatusCode::BAD_REQUEST,
            AppError::Form(e) => e.status(),
            AppError::Document(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Llm(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::MissingInput => "MISSING_INPUT",
            AppError::Form(_) => "INVALID_FORM",
            AppError::Document(_) => "UNREADABLE_DOCUMENT",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Text shown to the user. Remote and document failures keep their
    /// underlying description; internal errors are hidden.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingInput => MISSING_INPUT_WARNING.to_string(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
            other => format!("An error occurred: {other}"),
        }
    }

    /// Logs the error at a level matching its severity.
    pub fn log(&self) {
        match self {
            AppError::MissingInput | AppError::Form(_) => tracing::warn!("{}", self),
            AppError::Document(e) => tracing::warn!("Document error: {e}"),
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.user_message()
            }
        }));

        (self.status_code(), body).into_response()
    }
}
