//! Quiz data model and the per-level quiz session.

use rand::seq::SliceRandom;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One selectable answer.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
pub struct QuizOption {
    /// Display text.
    pub text: String,
    /// Whether selecting this option is the right answer.
    #[serde(default)]
    pub correct: bool,
}

/// A single multiple-choice question.
///
/// Immutable once loaded. Exactly one option should be correct; that is
/// a content-author invariant — [`validate`](Self::validate) reports
/// violations for tooling, nothing rejects content at runtime.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
pub struct Quiz {
    /// The question prompt.
    pub question: String,
    /// Selectable answers, in authored order.
    pub options: Vec<QuizOption>,
}

impl Quiz {
    /// Indices of [`options`](Self::options) in shuffled presentation
    /// order.
    #[must_use]
    pub fn shuffled_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.options.len()).collect();
        order.shuffle(rng);
        order
    }

    /// Content check: exactly one correct option.
    ///
    /// # Errors
    ///
    /// Describes the violation when the count is not exactly one.
    pub fn validate(&self) -> Result<(), String> {
        let correct = self.options.iter().filter(|o| o.correct).count();
        if correct == 1 {
            Ok(())
        } else {
            Err(format!(
                "question {:?} has {correct} correct options, expected 1",
                self.question
            ))
        }
    }
}

/// Outcome reported after answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct, with more questions remaining in the level.
    Correct,
    /// Correct on the final question: the level is cleared.
    LevelCleared,
    /// Wrong. The run ends without clearing the level.
    Incorrect,
}

/// Where a session is in its flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Showing a question, awaiting an answer.
    Asking,
    /// Correct answer given; a confirm advances to the next question.
    AwaitingNext,
    /// Every question answered correctly; a confirm completes the level.
    Cleared,
    /// A wrong answer ended the run; a confirm dismisses the overlay.
    Failed,
}

/// An in-flight quiz run for one level.
///
/// The presentation order of every question's options is shuffled once
/// at session start, so the UI can re-render the current question any
/// number of times without the answers jumping around.
pub struct QuizSession {
    level_id: u32,
    quizzes: Vec<Quiz>,
    orders: Vec<Vec<usize>>,
    current: usize,
    phase: SessionPhase,
}

impl QuizSession {
    /// Start a session over `quizzes`. Returns `None` when there is
    /// nothing to ask.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(
        level_id: u32,
        quizzes: Vec<Quiz>,
        rng: &mut R,
    ) -> Option<Self> {
        if quizzes.is_empty() {
            return None;
        }
        let orders =
            quizzes.iter().map(|q| q.shuffled_order(rng)).collect();
        Some(Self {
            level_id,
            quizzes,
            orders,
            current: 0,
            phase: SessionPhase::Asking,
        })
    }

    /// The level this session belongs to.
    #[must_use]
    pub fn level_id(&self) -> u32 {
        self.level_id
    }

    /// Current phase of the session flow.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Zero-based index of the question being shown.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.current
    }

    /// Total number of questions in the level.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.quizzes.len()
    }

    /// The question currently shown.
    #[must_use]
    pub fn question(&self) -> &Quiz {
        &self.quizzes[self.current]
    }

    /// Options of the current question in presented (shuffled) order,
    /// paired with their authored indices.
    #[must_use]
    pub fn presented_options(&self) -> Vec<(usize, &QuizOption)> {
        let quiz = &self.quizzes[self.current];
        self.orders[self.current]
            .iter()
            .map(|&i| (i, &quiz.options[i]))
            .collect()
    }

    /// Answer the current question by *presented* option index.
    ///
    /// Returns `None` when the session is not asking (already answered,
    /// cleared, or failed) or the index is out of range — both are
    /// silent no-ops at the engine layer.
    pub fn answer(&mut self, presented: usize) -> Option<AnswerOutcome> {
        if self.phase != SessionPhase::Asking {
            return None;
        }
        let authored =
            self.orders[self.current].get(presented).copied()?;
        let correct = self.quizzes[self.current].options[authored].correct;

        let outcome = if correct {
            if self.current + 1 == self.quizzes.len() {
                self.phase = SessionPhase::Cleared;
                AnswerOutcome::LevelCleared
            } else {
                self.phase = SessionPhase::AwaitingNext;
                AnswerOutcome::Correct
            }
        } else {
            self.phase = SessionPhase::Failed;
            AnswerOutcome::Incorrect
        };
        Some(outcome)
    }

    /// Move to the next question after a correct (non-final) answer.
    ///
    /// No-op unless the phase is [`SessionPhase::AwaitingNext`].
    pub fn advance(&mut self) {
        if self.phase == SessionPhase::AwaitingNext {
            self.current += 1;
            self.phase = SessionPhase::Asking;
        }
    }
}
