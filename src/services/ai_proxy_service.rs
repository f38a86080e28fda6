use std::sync::Arc;

use crate::{
    errors::AskError,
    services::model_service::{GenerativeModel, UpstreamError},
};

/// Forwards prompts to a generative model. Holds no per-request state; an
/// unconfigured proxy answers every request with `NotConfigured`.
#[derive(Clone)]
pub struct AiProxyService {
    model: Option<Arc<dyn GenerativeModel>>,
}

impl AiProxyService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn unconfigured() -> Self {
        Self { model: None }
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    pub async fn ask(&self, prompt: &str) -> Result<String, AskError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AskError::EmptyPrompt);
        }

        let model = self.model.as_ref().ok_or(AskError::NotConfigured)?;

        model.generate_content(prompt).await.map_err(|e| {
            log::error!("Error calling Gemini API: {}", e);
            classify_upstream_error(e)
        })
    }
}

/// Maps a provider failure to the user-facing category. First match wins.
pub fn classify_upstream_error(err: UpstreamError) -> AskError {
    if err.message.contains("API key not valid") {
        AskError::Unauthorized(err.message)
    } else if err.status == Some(429) {
        AskError::RateLimited(err.message)
    } else if err.message.contains("quota") {
        AskError::QuotaExceeded(err.message)
    } else {
        AskError::Upstream(err.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockGenerativeModel;
    use mockall::predicate::eq;

    fn proxy_with(mock: MockGenerativeModel) -> AiProxyService {
        AiProxyService::new(Arc::new(mock))
    }

    #[actix_web::test]
    async fn ask_returns_model_answer_for_trimmed_prompt() {
        let mut mock = MockGenerativeModel::new();
        mock.expect_generate_content()
            .with(eq("What is the capital of France?"))
            .times(1)
            .returning(|_| Ok("Paris".to_string()));

        let answer = proxy_with(mock)
            .ask("  What is the capital of France?  ")
            .await
            .unwrap();

        assert_eq!(answer, "Paris");
    }

    #[actix_web::test]
    async fn blank_prompt_never_reaches_the_model() {
        let mut mock = MockGenerativeModel::new();
        mock.expect_generate_content().times(0);

        let err = proxy_with(mock).ask("   \n").await.unwrap_err();
        assert_eq!(err, AskError::EmptyPrompt);
    }

    #[actix_web::test]
    async fn unconfigured_proxy_reports_not_configured() {
        let proxy = AiProxyService::unconfigured();
        assert!(!proxy.is_configured());
        assert_eq!(proxy.ask("hello").await, Err(AskError::NotConfigured));
    }

    #[actix_web::test]
    async fn upstream_rate_limit_is_classified() {
        let mut mock = MockGenerativeModel::new();
        mock.expect_generate_content()
            .returning(|_| Err(UpstreamError::with_status(429, "Too Many Requests")));

        let err = proxy_with(mock).ask("hello").await.unwrap_err();
        assert_eq!(err, AskError::RateLimited("Too Many Requests".to_string()));
    }

    #[test]
    fn classification_order_matches_precedence() {
        assert!(matches!(
            classify_upstream_error(UpstreamError::with_status(429, "API key not valid")),
            AskError::Unauthorized(_)
        ));
        assert!(matches!(
            classify_upstream_error(UpstreamError::with_status(429, "check quota")),
            AskError::RateLimited(_)
        ));
        assert!(matches!(
            classify_upstream_error(UpstreamError::with_status(403, "daily quota reached")),
            AskError::QuotaExceeded(_)
        ));
        assert!(matches!(
            classify_upstream_error(UpstreamError::transport("connection refused")),
            AskError::Upstream(_)
        ));
    }
}
