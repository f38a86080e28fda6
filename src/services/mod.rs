pub mod ai_proxy_service;
pub mod assistant_session;
pub mod gemini_client;
pub mod key_value_store;
pub mod model_service;
pub mod quiz_machine;

pub use ai_proxy_service::AiProxyService;
pub use assistant_session::{AssistantSession, KeyStatus};
pub use gemini_client::GeminiClient;
pub use key_value_store::{FileStore, KeyValueStore, MemoryStore};
pub use model_service::{GenerativeModel, UpstreamError};
pub use quiz_machine::{PresentationAdapter, QuizEvent, QuizMachine, Signal, SignalLog};
