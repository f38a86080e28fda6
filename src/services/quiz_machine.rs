use std::{sync::Arc, time::Duration};

use crate::{
    errors::QuizError,
    models::domain::{
        quiz_session::Reveal, FeedbackTier, QuestionBank, QuestionRecord, QuizResults,
        QuizSession, Screen,
    },
};

pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Observer of the quiz. Implementations render state; they never drive it.
#[cfg_attr(test, mockall::automock)]
pub trait PresentationAdapter {
    fn on_show_question(&mut self, index: usize, record: &QuestionRecord);
    fn on_reveal_answer(&mut self, chosen_index: usize, correct_index: usize);
    fn on_show_results(&mut self, score: usize, total: usize, tier: FeedbackTier);
    fn on_show_start(&mut self);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    ShowQuestion { index: usize, prompt: String },
    RevealAnswer { chosen: usize, correct: usize },
    ShowResults { score: usize, total: usize, tier: FeedbackTier },
    ShowStart,
}

/// Headless adapter that records every signal in emission order.
#[derive(Debug, Default)]
pub struct SignalLog {
    signals: Vec<Signal>,
}

impl SignalLog {
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn last(&self) -> Option<&Signal> {
        self.signals.last()
    }

    pub fn take(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }
}

impl PresentationAdapter for SignalLog {
    fn on_show_question(&mut self, index: usize, record: &QuestionRecord) {
        self.signals.push(Signal::ShowQuestion {
            index,
            prompt: record.prompt.clone(),
        });
    }

    fn on_reveal_answer(&mut self, chosen_index: usize, correct_index: usize) {
        self.signals.push(Signal::RevealAnswer {
            chosen: chosen_index,
            correct: correct_index,
        });
    }

    fn on_show_results(&mut self, score: usize, total: usize, tier: FeedbackTier) {
        self.signals.push(Signal::ShowResults { score, total, tier });
    }

    fn on_show_start(&mut self) {
        self.signals.push(Signal::ShowStart);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    Start,
    SubmitAnswer(usize),
    Tick(Duration),
    CompleteReveal,
    Restart,
}

/// Linear quiz state machine: `Start -> InProgress -> Finished -> Start`.
///
/// The feedback pause between answering and advancing is an explicit pending
/// reveal. Callers end it either with [`QuizMachine::complete_reveal`] or by
/// feeding elapsed time through [`QuizMachine::tick`] until the configured
/// reveal delay is reached.
pub struct QuizMachine<A: PresentationAdapter> {
    bank: Arc<QuestionBank>,
    session: QuizSession,
    reveal_delay: Duration,
    adapter: A,
}

impl<A: PresentationAdapter> QuizMachine<A> {
    pub fn new(bank: Arc<QuestionBank>, adapter: A) -> Self {
        Self {
            bank,
            session: QuizSession::default(),
            reveal_delay: DEFAULT_REVEAL_DELAY,
            adapter,
        }
    }

    pub fn with_reveal_delay(mut self, reveal_delay: Duration) -> Self {
        self.reveal_delay = reveal_delay;
        self
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }

    pub fn transition(&mut self, event: QuizEvent) -> Result<Screen, QuizError> {
        match event {
            QuizEvent::Start => self.start()?,
            QuizEvent::SubmitAnswer(choice_index) => {
                self.submit_answer(choice_index)?;
            }
            QuizEvent::Tick(elapsed) => {
                self.tick(elapsed)?;
            }
            QuizEvent::CompleteReveal => {
                self.complete_reveal()?;
            }
            QuizEvent::Restart => self.restart(),
        }
        Ok(self.session.screen)
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.session.screen == Screen::InProgress {
            return Err(QuizError::InvalidTransition {
                from: self.session.screen,
                event: "start the quiz",
            });
        }

        let first = self.bank.at(0)?;
        self.session.reset(Screen::InProgress);
        log::debug!("Quiz started with {} questions", self.bank.size());
        self.adapter.on_show_question(0, first);
        Ok(())
    }

    /// Records the answer for the current question and emits the reveal.
    /// Returns whether the chosen answer was correct; the point is credited
    /// when the reveal completes.
    pub fn submit_answer(&mut self, choice_index: usize) -> Result<bool, QuizError> {
        if self.session.screen != Screen::InProgress {
            return Err(QuizError::InvalidTransition {
                from: self.session.screen,
                event: "submit an answer",
            });
        }
        if self.session.pending_reveal.is_some() {
            return Err(QuizError::InvalidTransition {
                from: self.session.screen,
                event: "answer the same question twice",
            });
        }

        let record = self.bank.at(self.session.question_index)?;
        record.choice(choice_index)?;

        let reveal = Reveal {
            chosen: choice_index,
            correct: record.correct_index(),
            elapsed: Duration::ZERO,
        };
        self.session.pending_reveal = Some(reveal);
        log::debug!(
            "Question {} answered with choice {} (correct: {})",
            self.session.question_index,
            choice_index,
            reveal.is_correct()
        );
        self.adapter.on_reveal_answer(reveal.chosen, reveal.correct);

        Ok(reveal.is_correct())
    }

    /// Advances the reveal clock. Returns `true` when the pause elapsed and
    /// the machine moved on.
    pub fn tick(&mut self, elapsed: Duration) -> Result<bool, QuizError> {
        let Some(reveal) = self.session.pending_reveal.as_mut() else {
            return Ok(false);
        };

        reveal.elapsed = reveal.elapsed.saturating_add(elapsed);
        if reveal.elapsed < self.reveal_delay {
            return Ok(false);
        }

        self.complete_reveal()?;
        Ok(true)
    }

    pub fn complete_reveal(&mut self) -> Result<Screen, QuizError> {
        let reveal = self
            .session
            .pending_reveal
            .take()
            .ok_or(QuizError::InvalidTransition {
                from: self.session.screen,
                event: "advance without a revealed answer",
            })?;

        if reveal.is_correct() {
            self.session.score += 1;
        }
        self.session.question_index += 1;

        if self.session.question_index == self.bank.size() {
            self.session.screen = Screen::Finished;
            let results = QuizResults::compute(self.session.score, self.bank.size());
            log::info!(
                "Quiz finished: {}/{} ({}%, {})",
                results.score,
                results.total,
                results.percentage,
                results.tier
            );
            self.adapter
                .on_show_results(results.score, results.total, results.tier);
        } else {
            let next = self.bank.at(self.session.question_index)?;
            self.adapter
                .on_show_question(self.session.question_index, next);
        }

        Ok(self.session.screen)
    }

    /// Returns to the start screen from any state.
    pub fn restart(&mut self) {
        self.session.reset(Screen::Start);
        self.adapter.on_show_start();
    }

    pub fn results(&self) -> Option<QuizResults> {
        (self.session.screen == Screen::Finished)
            .then(|| QuizResults::compute(self.session.score, self.bank.size()))
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match self.session.screen {
            Screen::InProgress => self.bank.at(self.session.question_index).ok(),
            _ => None,
        }
    }

    /// Share of the bank already completed, as shown by a progress bar.
    pub fn progress_percent(&self) -> u32 {
        (100 * self.session.question_index / self.bank.size()) as u32
    }

    pub fn question_label(&self) -> Option<String> {
        self.current_question().map(|_| {
            format!(
                "Question {} of {}",
                self.session.question_index + 1,
                self.bank.size()
            )
        })
    }
}
