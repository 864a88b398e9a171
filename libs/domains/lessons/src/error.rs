use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use thiserror::Error;

use crate::models::LessonId;

#[derive(Debug, Error)]
pub enum LessonError {
    #[error("Invalid input: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Lesson not found: {0}")]
    NotFound(LessonId),

    #[error("Downstream returned {status}: {body}")]
    DownstreamStatus { status: u16, body: String },

    #[error("Downstream timed out: {0}")]
    DownstreamTimeout(String),

    #[error("Downstream unavailable: {0}")]
    DownstreamUnavailable(String),

    #[error("Could not decode downstream response: {0}")]
    DownstreamDecode(String),

    #[error("Downstream transport error: {0}")]
    Transport(String),
}

pub type LessonResult<T> = Result<T, LessonError>;

impl From<reqwest::Error> for LessonError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LessonError::DownstreamTimeout(err.to_string())
        } else if err.is_connect() {
            LessonError::DownstreamUnavailable(err.to_string())
        } else if err.is_decode() {
            LessonError::DownstreamDecode(err.to_string())
        } else {
            LessonError::Transport(err.to_string())
        }
    }
}

/// Downstream body as the client message, or the code's default when blank
fn message_or_default(body: String, code: ErrorCode) -> String {
    if body.trim().is_empty() {
        code.default_message().to_string()
    } else {
        body
    }
}

/// Convert LessonError to AppError for standardized error responses
impl From<LessonError> for AppError {
    fn from(err: LessonError) -> Self {
        match err {
            LessonError::Validation(errors) => AppError::ValidationError(errors),
            LessonError::NotFound(id) => AppError::NotFound(format!("Lesson {} not found", id)),
            LessonError::DownstreamStatus { status, body } => match status {
                400 => AppError::BadRequest(message_or_default(body, ErrorCode::BadRequest)),
                404 => AppError::NotFound(message_or_default(body, ErrorCode::NotFound)),
                409 => AppError::Conflict(message_or_default(body, ErrorCode::Conflict)),
                422 => AppError::UnprocessableEntity(message_or_default(
                    body,
                    ErrorCode::UnprocessableEntity,
                )),
                other => AppError::BadGateway(format!("Lessons service returned {}", other)),
            },
            LessonError::DownstreamTimeout(_) => {
                AppError::GatewayTimeout("Lessons service timed out".to_string())
            }
            LessonError::DownstreamUnavailable(_) => {
                AppError::ServiceUnavailable("Lessons service is unavailable".to_string())
            }
            LessonError::DownstreamDecode(msg) | LessonError::Transport(msg) => {
                AppError::BadGateway(msg)
            }
        }
    }
}

impl IntoResponse for LessonError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
