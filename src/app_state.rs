use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{AiProxyService, GeminiClient, GenerativeModel},
};

#[derive(Clone)]
pub struct AppState {
    pub ai_proxy: Arc<AiProxyService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = GeminiClient::new(config.gemini_api_key.clone(), config.gemini.clone())?;
        log::info!("Gemini client ready (model: {})", config.gemini.model);

        Ok(Self::with_model(config, Arc::new(client)))
    }

    /// Wires the proxy to an arbitrary model backend.
    pub fn with_model(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            ai_proxy: Arc::new(AiProxyService::new(model)),
            config: Arc::new(config),
        }
    }
}
