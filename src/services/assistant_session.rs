use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    config::GeminiSettings,
    constants::PromptTemplate,
    errors::{AppError, AppResult},
    services::{
        ai_proxy_service::AiProxyService,
        gemini_client::GeminiClient,
        key_value_store::KeyValueStore,
        model_service::GenerativeModel,
    },
};

pub const API_KEY_STORAGE_KEY: &str = "geminiApiKey";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStatus {
    MissingKey,
    Ready,
    Invalid,
    Cleared,
}

impl KeyStatus {
    pub fn message(&self) -> &'static str {
        match self {
            KeyStatus::MissingKey => "No API Key found. Please enter it above.",
            KeyStatus::Ready => "API Key loaded successfully!",
            KeyStatus::Invalid => "Error initializing API. Check your key.",
            KeyStatus::Cleared => "API Key cleared.",
        }
    }
}

pub type ModelFactory =
    Box<dyn Fn(SecretString) -> AppResult<Arc<dyn GenerativeModel>> + Send + Sync>;

/// The assistant widget's key lifecycle: the key lives in one store slot and
/// the proxy is rebuilt whenever the slot changes.
pub struct AssistantSession<S: KeyValueStore> {
    store: S,
    factory: ModelFactory,
    proxy: AiProxyService,
    status: KeyStatus,
}

impl<S: KeyValueStore> AssistantSession<S> {
    /// Opens a session backed by the Gemini REST client.
    pub fn load(store: S, settings: GeminiSettings) -> AppResult<Self> {
        Self::with_model_factory(
            store,
            Box::new(move |key| {
                let client = GeminiClient::new(key, settings.clone())?;
                Ok(Arc::new(client) as Arc<dyn GenerativeModel>)
            }),
        )
    }

    pub fn with_model_factory(store: S, factory: ModelFactory) -> AppResult<Self> {
        let mut session = Self {
            store,
            factory,
            proxy: AiProxyService::unconfigured(),
            status: KeyStatus::MissingKey,
        };

        if let Some(key) = session.store.get(API_KEY_STORAGE_KEY)? {
            session.initialize(key)?;
        }

        Ok(session)
    }

    pub fn status(&self) -> KeyStatus {
        self.status
    }

    pub fn proxy(&self) -> &AiProxyService {
        &self.proxy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save_key(&mut self, key: &str) -> AppResult<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::ValidationError(
                "Please enter a valid API Key.".to_string(),
            ));
        }

        self.store.set(API_KEY_STORAGE_KEY, key)?;
        self.initialize(key.to_string())
    }

    pub fn clear_key(&mut self) -> AppResult<()> {
        self.store.remove(API_KEY_STORAGE_KEY)?;
        self.proxy = AiProxyService::unconfigured();
        self.status = KeyStatus::Cleared;
        log::info!("Assistant API key cleared");
        Ok(())
    }

    pub async fn ask(&self, template: PromptTemplate, input: &str) -> AppResult<String> {
        let prompt = template.render(input)?;
        Ok(self.proxy.ask(&prompt).await?)
    }

    fn initialize(&mut self, key: String) -> AppResult<()> {
        match (self.factory)(SecretString::from(key)) {
            Ok(model) => {
                self.proxy = AiProxyService::new(model);
                self.status = KeyStatus::Ready;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to initialize Gemini API: {}", e);
                self.proxy = AiProxyService::unconfigured();
                self.status = KeyStatus::Invalid;
                Err(e)
            }
        }
    }
}
