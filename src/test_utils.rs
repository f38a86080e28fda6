#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::models::domain::{Choice, QuestionBank, QuestionRecord};

    /// Two-question bank: the first answer is choice 0, the second choice 1.
    pub fn two_question_bank() -> Arc<QuestionBank> {
        Arc::new(
            QuestionBank::new(vec![
                QuestionRecord::new(
                    "First?",
                    vec![Choice::new("yes", true), Choice::new("no", false)],
                ),
                QuestionRecord::new(
                    "Second?",
                    vec![Choice::new("yes", false), Choice::new("no", true)],
                ),
            ])
            .expect("fixture bank is valid"),
        )
    }

    /// Index of the correct choice for each question, in bank order.
    pub fn correct_choices(bank: &QuestionBank) -> Vec<usize> {
        bank.iter().map(|q| q.correct_index()).collect()
    }

    /// Some index that is a wrong answer for `record`.
    pub fn wrong_choice(record: &QuestionRecord) -> usize {
        record
            .incorrect_index()
            .expect("fixture questions have a wrong choice")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use crate::models::domain::QuestionBank;
    use actix_web::http::StatusCode;

    #[test]
    fn test_fixtures_two_question_bank() {
        let bank = two_question_bank();
        assert_eq!(bank.size(), 2);
        assert_eq!(correct_choices(&bank), vec![0, 1]);
    }

    #[test]
    fn test_fixtures_wrong_choice_is_wrong() {
        let bank = QuestionBank::default_bank();
        for record in bank.iter() {
            let wrong = wrong_choice(record);
            assert!(!record.choices[wrong].is_correct);
        }
    }

    #[test]
    fn test_status_helpers() {
        assert_error_status(StatusCode::BAD_REQUEST);
        assert_success_status(StatusCode::OK);
    }
}
