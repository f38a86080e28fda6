use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::domain::quiz_session::Screen;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{message}")]
    UpstreamError { message: String, details: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::UpstreamError { .. } => "UPSTREAM_ERROR",
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::UpstreamError { message, details } => ErrorResponse {
                error: message.clone(),
                details: Some(details.clone()),
                code: self.error_code(),
            },
            AppError::ConfigError(msg) | AppError::InternalError(msg) => ErrorResponse {
                error: "An unexpected server error occurred.".to_string(),
                details: Some(msg.clone()),
                code: self.error_code(),
            },
            _ => ErrorResponse {
                error: self.to_string(),
                details: None,
                code: self.error_code(),
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        // Surface the first field message rather than validator's debug listing.
        let message = err
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| err.to_string());
        AppError::ValidationError(message)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON error: {}", err))
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<AskError> for AppError {
    fn from(err: AskError) -> Self {
        match err {
            AskError::EmptyPrompt => AppError::ValidationError(err.to_string()),
            AskError::NotConfigured => AppError::UpstreamError {
                message: err.to_string(),
                details: "No Gemini API key has been configured".to_string(),
            },
            AskError::Unauthorized(ref details)
            | AskError::RateLimited(ref details)
            | AskError::QuotaExceeded(ref details)
            | AskError::Upstream(ref details) => AppError::UpstreamError {
                message: err.to_string(),
                details: details.clone(),
            },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Contract violations raised by the quiz state machine. None of them mutate
/// the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Invalid transition: cannot {event} while on the {from} screen")]
    InvalidTransition { from: Screen, event: &'static str },

    #[error("Index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Outcome of a failed `ask` against the AI proxy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AskError {
    #[error("Question is required and must be a non-empty string.")]
    EmptyPrompt,

    #[error("Gemini API not initialized. Please set your API key.")]
    NotConfigured,

    #[error("Authentication error: Your Gemini API Key might be invalid.")]
    Unauthorized(String),

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited(String),

    #[error("Quota exceeded. Please check your usage limits.")]
    QuotaExceeded(String),

    #[error("Failed to get an answer from Gemini AI.")]
    Upstream(String),
}
