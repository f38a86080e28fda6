use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const QUESTION_REQUIRED: &str = "Question is required and must be a non-empty string.";

fn validate_question(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed(QUESTION_REQUIRED));
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AskRequest {
    #[validate(custom(function = "validate_question"))]
    pub question: String,
}

/// Body for the canned assistant prompts. Blank input is reported with the
/// template's own hint, so no validation rules live here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantRequest {
    pub input: String,
}
