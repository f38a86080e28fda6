use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::{
    errors::{AppError, AppResult, QuizError},
    models::domain::question::{Choice, QuestionRecord},
};

static DEFAULT_BANK: Lazy<Arc<QuestionBank>> = Lazy::new(|| {
    let q = |prompt: &str, labels: [&str; 4], correct: usize| {
        QuestionRecord::new(
            prompt,
            labels
                .iter()
                .enumerate()
                .map(|(i, label)| Choice::new(label, i == correct))
                .collect(),
        )
    };

    Arc::new(QuestionBank {
        questions: vec![
            q(
                "What is the capital of France?",
                ["Berlin", "Madrid", "Paris", "Rome"],
                2,
            ),
            q(
                "Which planet is known as the 'Red Planet'?",
                ["Earth", "Mars", "Jupiter", "Venus"],
                1,
            ),
            q(
                "What is the largest ocean on Earth?",
                ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean", "Pacific Ocean"],
                3,
            ),
            q(
                "Who wrote 'Romeo and Juliet'?",
                ["Charles Dickens", "William Shakespeare", "Jane Austen", "Mark Twain"],
                1,
            ),
            q(
                "What is the chemical symbol for water?",
                ["O2", "H2O", "CO2", "NACL"],
                1,
            ),
        ],
    })
});

/// Ordered, read-only list of quiz questions. Built once and shared behind an
/// `Arc`; there is no update operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuestionRecord>,
}

impl QuestionBank {
    pub fn new(questions: Vec<QuestionRecord>) -> AppResult<Self> {
        if questions.is_empty() {
            return Err(AppError::ValidationError(
                "Question bank must contain at least one question".to_string(),
            ));
        }

        for (i, question) in questions.iter().enumerate() {
            let correct = question.correct_count();
            if correct != 1 {
                return Err(AppError::ValidationError(format!(
                    "Question {} ('{}') must have exactly one correct choice, found {}",
                    i, question.prompt, correct
                )));
            }
        }

        Ok(Self { questions })
    }

    /// The five built-in general knowledge questions.
    pub fn default_bank() -> Arc<QuestionBank> {
        Arc::clone(&DEFAULT_BANK)
    }

    pub fn size(&self) -> usize {
        self.questions.len()
    }

    pub fn at(&self, index: usize) -> Result<&QuestionRecord, QuizError> {
        self.questions.get(index).ok_or(QuizError::IndexOutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.questions.iter()
    }
}
