use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Start,
    InProgress,
    Finished,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Start => write!(f, "start"),
            Screen::InProgress => write!(f, "in-progress"),
            Screen::Finished => write!(f, "finished"),
        }
    }
}

/// An answer that has been revealed but not yet advanced past.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub chosen: usize,
    pub correct: usize,
    pub elapsed: Duration,
}

impl Reveal {
    pub fn is_correct(&self) -> bool {
        self.chosen == self.correct
    }
}

/// One run through the question bank. Only the quiz machine mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    pub(crate) question_index: usize,
    pub(crate) score: usize,
    pub(crate) screen: Screen,
    pub(crate) pending_reveal: Option<Reveal>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            question_index: 0,
            score: 0,
            screen: Screen::Start,
            pending_reveal: None,
        }
    }
}

impl QuizSession {
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn pending_reveal(&self) -> Option<&Reveal> {
        self.pending_reveal.as_ref()
    }

    pub fn is_revealing(&self) -> bool {
        self.pending_reveal.is_some()
    }

    pub(crate) fn reset(&mut self, screen: Screen) {
        self.question_index = 0;
        self.score = 0;
        self.screen = screen;
        self.pending_reveal = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackTier {
    Perfect,
    Great,
    Good,
    Encourage,
}

impl FeedbackTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100 => FeedbackTier::Perfect,
            p if p >= 70 => FeedbackTier::Great,
            p if p >= 40 => FeedbackTier::Good,
            _ => FeedbackTier::Encourage,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackTier::Perfect => "perfect",
            FeedbackTier::Great => "great",
            FeedbackTier::Good => "good",
            FeedbackTier::Encourage => "encourage",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Perfect => "Amazing! You're a true quiz master!",
            FeedbackTier::Great => "Great job! You know your stuff.",
            FeedbackTier::Good => "Good effort! Keep practicing.",
            FeedbackTier::Encourage => {
                "Don't worry, every expert was once a beginner. Try again!"
            }
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: FeedbackTier,
}

impl QuizResults {
    /// `total` is the bank size and never zero.
    pub fn compute(score: usize, total: usize) -> Self {
        let percentage = (100 * score / total.max(1)) as u32;
        Self {
            score,
            total,
            percentage,
            tier: FeedbackTier::from_percentage(percentage),
        }
    }

    pub fn summary(&self) -> String {
        format!("You scored {} out of {} correct!", self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds_are_evaluated_top_down() {
        assert_eq!(FeedbackTier::from_percentage(100), FeedbackTier::Perfect);
        assert_eq!(FeedbackTier::from_percentage(99), FeedbackTier::Great);
        assert_eq!(FeedbackTier::from_percentage(70), FeedbackTier::Great);
        assert_eq!(FeedbackTier::from_percentage(69), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_percentage(40), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_percentage(39), FeedbackTier::Encourage);
        assert_eq!(FeedbackTier::from_percentage(0), FeedbackTier::Encourage);
    }

    #[test]
    fn results_for_five_question_bank() {
        let perfect = QuizResults::compute(5, 5);
        assert_eq!(perfect.percentage, 100);
        assert_eq!(perfect.tier, FeedbackTier::Perfect);

        let four = QuizResults::compute(4, 5);
        assert_eq!(four.percentage, 80);
        assert_eq!(four.tier, FeedbackTier::Great);

        let three = QuizResults::compute(3, 5);
        assert_eq!(three.percentage, 60);
        assert_eq!(three.tier, FeedbackTier::Good);

        let one = QuizResults::compute(1, 5);
        assert_eq!(one.tier, FeedbackTier::Encourage);
        assert_eq!(one.summary(), "You scored 1 out of 5 correct!");
    }

    #[test]
    fn integer_percentage_keeps_fractional_boundaries() {
        // 2/3 is 66.6%, still below the great threshold
        assert_eq!(QuizResults::compute(2, 3).tier, FeedbackTier::Good);
        assert_eq!(QuizResults::compute(7, 10).tier, FeedbackTier::Great);
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&FeedbackTier::Encourage).unwrap();
        assert_eq!(json, "\"encourage\"");
    }

    #[test]
    fn session_defaults_to_start_screen() {
        let session = QuizSession::default();
        assert_eq!(session.screen(), Screen::Start);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(!session.is_revealing());
    }
}
