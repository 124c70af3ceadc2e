//! Multi-question quiz gate.
//!
//! The player must answer every question correctly to unlock the next page.
//! A wrong answer reveals the question's hint; a correct one approves the
//! question until the host advances after its display delay.
//!
//! ```text
//! Asking --correct--> Approved --advance--> Asking (next) | Unlocked (terminal)
//!   ^  |
//!   +--+ wrong (hint shown)
//! ```

pub mod machine;

pub use machine::{AnswerOutcome, Progress, Question, Quiz, QuizError, QuizPhase};
