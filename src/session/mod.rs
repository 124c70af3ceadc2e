//! Session: owns games, the clock, and the navigation hook.
//!
//! A `Session` is the single owned handle a page holds. It stores games by
//! `GameId`, schedules evaluations after the reveal delay, announces each win
//! to the `Navigator` exactly once, and cancels a game's timers when the game
//! is torn down.

pub mod navigator;
pub mod runner;

pub use navigator::{Navigator, NullNavigator};
pub use runner::{MatchTask, Session, TimerOutcome};
