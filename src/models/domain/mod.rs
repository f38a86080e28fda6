pub mod question;
pub mod question_bank;
pub mod quiz_session;
pub use question::{Choice, QuestionRecord};
pub use question_bank::QuestionBank;
pub use quiz_session::{FeedbackTier, QuizResults, QuizSession, Screen};
