//! The match-game aggregate and its read model.
//!
//! ## Key Types
//!
//! - `Game`: deck, selection, evaluation flag, win flag, history
//! - `SelectOutcome` / `IgnoreReason`: result of a pick
//! - `Resolution`: result of evaluating a two-card selection
//! - `GameEvent` / `EventRecord`: what happened, in order
//! - `GameView` / `CardView`: serializable snapshot for rendering
//!
//! ## Game Phases
//!
//! ```text
//! InProgress -> Evaluating -> InProgress (repeat) -> Won (terminal)
//! ```
//!
//! `Game` is synchronous: a pick that completes a selection returns
//! `SelectOutcome::EvaluationPending` and the owner calls `Game::resolve`
//! once the reveal delay has passed. `Session` does that scheduling.

pub mod event;
pub mod state;
pub mod view;

pub use event::{EventRecord, GameEvent};
pub use state::{Game, GamePhase, IgnoreReason, Resolution, SelectOutcome, Selection};
pub use view::{CardView, GameView};
