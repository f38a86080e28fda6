use std::{fmt, str::FromStr};

use crate::errors::{AppError, AppResult};

/// Canned prompts offered by the assistant widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptTemplate {
    AskAnything,
    Summarize,
    IdeaSpark,
    Definition,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 4] = [
        PromptTemplate::AskAnything,
        PromptTemplate::Summarize,
        PromptTemplate::IdeaSpark,
        PromptTemplate::Definition,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            PromptTemplate::AskAnything => "ask-anything",
            PromptTemplate::Summarize => "summarize",
            PromptTemplate::IdeaSpark => "idea-spark",
            PromptTemplate::Definition => "definition",
        }
    }

    /// Message shown when the user submits nothing.
    pub fn empty_input_hint(&self) -> &'static str {
        match self {
            PromptTemplate::AskAnything => "Please enter a question for Ask Me Anything.",
            PromptTemplate::Summarize => "Please paste some text to summarize.",
            PromptTemplate::IdeaSpark => {
                "Please enter a topic for ideas (e.g., \"blog post ideas\", \"story prompts\")."
            }
            PromptTemplate::Definition => "Please enter a term to define.",
        }
    }

    pub fn render(&self, input: &str) -> AppResult<String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AppError::ValidationError(self.empty_input_hint().to_string()));
        }

        Ok(match self {
            PromptTemplate::AskAnything => format!(
                "Answer the following question comprehensively and politely: \"{}\"",
                input
            ),
            PromptTemplate::Summarize => format!(
                "Summarize the following text concisely and clearly: \n\n\"{}\"",
                input
            ),
            PromptTemplate::IdeaSpark => format!(
                "Generate a list of creative ideas based on the following request. Provide at least 5 distinct ideas:\n\nRequest: \"{}\"",
                input
            ),
            PromptTemplate::Definition => format!(
                "Provide a clear and concise definition and a brief explanation for the term: \"{}\"",
                input
            ),
        })
    }
}

impl FromStr for PromptTemplate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptTemplate::ALL
            .into_iter()
            .find(|t| t.slug() == s)
            .ok_or_else(|| AppError::NotFound(format!("Prompt template '{}'", s)))
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
