//! # memory-match
//!
//! A deterministic engine for a memory match-game: flip two cards, keep them
//! if they pair up, solve the board.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: A `Game` is a plain value. No globals; a `Session`
//!    owns every live game behind a `GameId`.
//!
//! 2. **Input-Tolerant**: Invalid picks (unknown card, card already up,
//!    pick during evaluation, pick after the win) are ignored, never errors.
//!
//! 3. **Explicit Time**: Delayed transitions are tasks on a logical clock,
//!    keyed to their game and cancelled on teardown.
//!
//! 4. **Reproducible**: Decks are shuffled by a seedable ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: IDs, RNG, configuration
//! - `cards`: Cards and deck construction
//! - `game`: The game aggregate, outcomes, history, read model
//! - `schedule`: Logical-clock timer queue
//! - `session`: Game arena, timers, navigation hook
//! - `layout`: Shaped grid placement
//! - `quiz`: Quiz gate phase machine
//! - `ask`: Closing question with the dodging button

pub mod core;
pub mod cards;
pub mod game;
pub mod schedule;
pub mod session;
pub mod layout;
pub mod quiz;
pub mod ask;

// Re-export commonly used types
pub use crate::core::{
    CardId, PairId, GameId,
    GameRng, GameRngState,
    ConfigError, MatchConfig, PairSpec,
};

pub use crate::cards::{Card, CardFace, Deck};

pub use crate::game::{
    Game, GamePhase, Selection, SelectOutcome, IgnoreReason, Resolution,
    GameEvent, EventRecord, GameView, CardView,
};

pub use crate::schedule::{Scheduler, ScheduledTask, TaskId};

pub use crate::session::{Navigator, NullNavigator, Session, MatchTask, TimerOutcome};

pub use crate::layout::{GridMask, LayoutError, Placement, Slot};

pub use crate::quiz::{Quiz, Question, QuizPhase, QuizError, AnswerOutcome, Progress};

pub use crate::ask::Proposal;
