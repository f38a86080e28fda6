use async_trait::async_trait;
use thiserror::Error;

/// Raw failure reported by a text-generation backend, before it is mapped to
/// a user-facing [`crate::errors::AskError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UpstreamError {
    /// HTTP status of the provider response, if one was received.
    pub status: Option<u16>,
    pub message: String,
}

impl UpstreamError {
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_content(&self, prompt: &str) -> Result<String, UpstreamError>;
}
