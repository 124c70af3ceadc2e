//! Core engine types: identifiers, RNG, configuration.
//!
//! These are the building blocks shared by the deck, the game aggregate,
//! and the session that drives it.

pub mod ids;
pub mod rng;
pub mod config;

pub use ids::{CardId, PairId, GameId};
pub use rng::{GameRng, GameRngState};
pub use config::{check_pairs, ConfigError, MatchConfig, PairSpec};
