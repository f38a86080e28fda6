pub mod request;
pub mod response;

pub use request::{AskRequest, AssistantRequest};
pub use response::{AskResponse, AssistantResponse};
