use serde::{Deserialize, Serialize};

use crate::errors::QuizError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    pub prompt: String,
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    pub label: String,
    pub is_correct: bool,
}

impl Choice {
    pub fn new(label: &str, is_correct: bool) -> Self {
        Self {
            label: label.to_string(),
            is_correct,
        }
    }
}

impl QuestionRecord {
    pub fn new(prompt: &str, choices: Vec<Choice>) -> Self {
        Self {
            prompt: prompt.to_string(),
            choices,
        }
    }

    pub fn choice(&self, index: usize) -> Result<&Choice, QuizError> {
        self.choices.get(index).ok_or(QuizError::IndexOutOfRange {
            index,
            len: self.choices.len(),
        })
    }

    /// Position of the correct choice. Records are checked for exactly one
    /// correct choice when the bank is built, so this is always in range for
    /// bank-owned records.
    pub fn correct_index(&self) -> usize {
        self.choices
            .iter()
            .position(|c| c.is_correct)
            .unwrap_or_default()
    }

    pub fn correct_count(&self) -> usize {
        self.choices.iter().filter(|c| c.is_correct).count()
    }

    /// First choice that is not the correct one, if the record has any.
    pub fn incorrect_index(&self) -> Option<usize> {
        self.choices.iter().position(|c| !c.is_correct)
    }
}
