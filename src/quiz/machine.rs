//! Quiz phase machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Invalid quiz definition.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,

    #[error("question {index} needs at least two options")]
    TooFewOptions { index: usize },

    #[error("question {index} marks option {correct} correct but has {options} options")]
    CorrectOutOfRange { index: usize, correct: usize, options: usize },
}

/// One question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub hint: String,
}

impl Question {
    /// Create a question.
    pub fn new<S: Into<String>>(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct: usize,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
            hint: hint.into(),
        }
    }
}

/// Where the quiz is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizPhase {
    /// Waiting for an answer to the current question.
    Asking,
    /// Current question answered correctly; waiting for `advance`.
    Approved,
    /// All questions answered. Terminal.
    Unlocked,
}

/// Result of `Quiz::answer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerOutcome {
    /// Correct; `last` is true for the final question.
    Correct { last: bool },
    /// Wrong; the hint is now visible.
    Wrong,
    /// Not accepted (already approved, unlocked, or no such option).
    Ignored,
}

/// Status of a question in the progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Progress {
    Done,
    Current,
    Pending,
}

/// A running quiz.
#[derive(Clone, Debug)]
pub struct Quiz {
    questions: Vec<Question>,
    current: usize,
    phase: QuizPhase,
    hint_visible: bool,
    wrong_attempts: u32,
}

impl Quiz {
    /// Delay between a correct answer and `advance`.
    pub const APPROVE_DELAY: Duration = Duration::from_millis(1200);

    /// Delay between unlocking and leaving the page.
    pub const UNLOCK_DELAY: Duration = Duration::from_millis(2500);

    /// Start a quiz at the first question.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        for (index, q) in questions.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(QuizError::TooFewOptions { index });
            }
            if q.correct >= q.options.len() {
                return Err(QuizError::CorrectOutOfRange {
                    index,
                    correct: q.correct,
                    options: q.options.len(),
                });
            }
        }
        Ok(Self {
            questions,
            current: 0,
            phase: QuizPhase::Asking,
            hint_visible: false,
            wrong_attempts: 0,
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Index of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current question.
    #[must_use]
    pub fn current(&self) -> &Question {
        &self.questions[self.current]
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; a quiz has at least one question.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Hint for the current question, once a wrong answer revealed it.
    #[must_use]
    pub fn visible_hint(&self) -> Option<&str> {
        self.hint_visible.then(|| self.current().hint.as_str())
    }

    /// Wrong answers on the current question.
    #[must_use]
    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    /// Is the quiz done?
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.phase == QuizPhase::Unlocked
    }

    /// Per-question status for the progress bar.
    #[must_use]
    pub fn progress(&self) -> Vec<Progress> {
        (0..self.questions.len())
            .map(|i| {
                if i < self.current || self.phase == QuizPhase::Unlocked {
                    Progress::Done
                } else if i == self.current {
                    Progress::Current
                } else {
                    Progress::Pending
                }
            })
            .collect()
    }

    /// Answer the current question with option `index`.
    pub fn answer(&mut self, index: usize) -> AnswerOutcome {
        if self.phase != QuizPhase::Asking || index >= self.current().options.len() {
            return AnswerOutcome::Ignored;
        }

        if index == self.current().correct {
            self.phase = QuizPhase::Approved;
            self.hint_visible = false;
            debug!(question = self.current, "answer approved");
            AnswerOutcome::Correct {
                last: self.current + 1 == self.questions.len(),
            }
        } else {
            self.hint_visible = true;
            self.wrong_attempts += 1;
            debug!(question = self.current, attempts = self.wrong_attempts, "wrong answer");
            AnswerOutcome::Wrong
        }
    }

    /// Leave the approved state: next question, or unlock after the last.
    ///
    /// Returns the new phase. No-op outside `Approved`.
    pub fn advance(&mut self) -> QuizPhase {
        if self.phase != QuizPhase::Approved {
            return self.phase;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.phase = QuizPhase::Asking;
            self.wrong_attempts = 0;
        } else {
            self.phase = QuizPhase::Unlocked;
            info!(questions = self.questions.len(), "quiz unlocked");
        }
        self.phase
    }
}
